//! Lifecycle transition table and the owning wrapper

use crate::project::Project;
use crate::status::ProjectStatus;
use crate::step::{StepNumber, StepRoute};

/// Transition validation failures
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The transition is not in the table
    #[error("illegal status transition: {from} -> {to}")]
    Illegal {
        from: ProjectStatus,
        to: ProjectStatus,
    },

    /// Completion was requested before the final step
    #[error("workflow completes only from step 7 (currently at step {step})")]
    NotAtFinalStep { step: StepNumber },
}

/// Statuses reachable from `from` in one transition
///
/// `InProgress -> InProgress` is the resume self-loop (step pointer
/// unchanged). Completion is listed here status-wise; the step-7 guard is
/// enforced by [`ProjectLifecycle::complete`].
#[must_use]
pub fn allowed_transitions(from: ProjectStatus) -> Vec<ProjectStatus> {
    use ProjectStatus::*;
    match from {
        Pending => vec![InProgress, Canceled, Removed],
        InProgress => vec![InProgress, Completed, Canceled, Removed],
        Completed => vec![Removed],
        Canceled => vec![Removed],
        Removed => vec![],
    }
}

/// Validate a single status transition
pub fn validate_transition(
    from: ProjectStatus,
    to: ProjectStatus,
) -> Result<(), TransitionError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(TransitionError::Illegal { from, to })
    }
}

/// Sole writer of a project's status and step pointer
///
/// Wraps the [`Project`] record and applies only table-validated
/// transitions; every mutation returns the route the shell should navigate
/// to, where one makes sense.
#[derive(Debug, Clone)]
pub struct ProjectLifecycle {
    project: Project,
}

impl ProjectLifecycle {
    /// Wrap a project, normalizing its step pointer for its status
    #[must_use]
    pub fn new(mut project: Project) -> Self {
        project.current_step = Project::derive_step(
            project.status,
            project.current_step.map(|s| i64::from(s.get())),
        );
        Self { project }
    }

    /// The wrapped project
    #[inline]
    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Current status
    #[inline]
    #[must_use]
    pub fn status(&self) -> ProjectStatus {
        self.project.status
    }

    /// Current step pointer, when the status carries one
    #[inline]
    #[must_use]
    pub fn current_step(&self) -> Option<StepNumber> {
        self.project.current_step
    }

    /// Start or resume the workflow
    ///
    /// `Pending` moves to `InProgress` at step 1; `InProgress` resumes at
    /// its unchanged step pointer. Returns the route for the step to work
    /// on.
    ///
    /// # Errors
    /// Any other status cannot start.
    pub fn start(&mut self) -> Result<StepRoute, TransitionError> {
        match self.project.status {
            ProjectStatus::Pending => {
                validate_transition(ProjectStatus::Pending, ProjectStatus::InProgress)?;
                self.project.status = ProjectStatus::InProgress;
                self.project.current_step = Some(StepNumber::FIRST);
                Ok(StepNumber::FIRST.route())
            }
            ProjectStatus::InProgress => self.resume(),
            from => Err(TransitionError::Illegal {
                from,
                to: ProjectStatus::InProgress,
            }),
        }
    }

    /// Resume an in-progress workflow at its current step
    ///
    /// # Errors
    /// Only `InProgress` can resume.
    pub fn resume(&mut self) -> Result<StepRoute, TransitionError> {
        validate_transition(self.project.status, ProjectStatus::InProgress)?;
        let step = self.project.current_step.unwrap_or(StepNumber::FIRST);
        self.project.current_step = Some(step);
        Ok(step.route())
    }

    /// Move the step pointer while in progress (save-and-continue)
    ///
    /// # Errors
    /// Only `InProgress` carries a movable step pointer.
    pub fn advance_to(&mut self, step: StepNumber) -> Result<StepRoute, TransitionError> {
        validate_transition(self.project.status, ProjectStatus::InProgress)?;
        self.project.current_step = Some(step);
        Ok(step.route())
    }

    /// Explicitly finish the workflow
    ///
    /// Never automatic: reaching step 7 does not complete the project.
    ///
    /// # Errors
    /// Requires `InProgress` at step 7.
    pub fn complete(&mut self) -> Result<(), TransitionError> {
        validate_transition(self.project.status, ProjectStatus::Completed)?;
        let step = self.project.current_step.unwrap_or(StepNumber::FIRST);
        if !step.is_last() {
            return Err(TransitionError::NotAtFinalStep { step });
        }
        self.project.status = ProjectStatus::Completed;
        self.project.current_step = Some(StepNumber::LAST);
        Ok(())
    }

    /// Explicitly cancel an active project
    ///
    /// # Errors
    /// Only active (pending/in-progress) projects can be canceled.
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        validate_transition(self.project.status, ProjectStatus::Canceled)?;
        self.project.status = ProjectStatus::Canceled;
        self.project.current_step = None;
        Ok(())
    }

    /// Remove the project from active lists (terminal)
    ///
    /// # Errors
    /// A removed project has no further transitions, including removal.
    pub fn remove(&mut self) -> Result<(), TransitionError> {
        validate_transition(self.project.status, ProjectStatus::Removed)?;
        self.project.status = ProjectStatus::Removed;
        self.project.current_step = None;
        Ok(())
    }

    /// Dashboard label for the next action
    #[inline]
    #[must_use]
    pub fn next_step_label(&self) -> String {
        self.project.next_step_label()
    }
}
