//! The project record and its derived navigation values

use crate::status::ProjectStatus;
use crate::step::StepNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A safety-analysis project as the workbench tracks it
///
/// `status` and `current_step` are written exclusively by
/// [`crate::ProjectLifecycle`]; everything else is descriptive metadata from
/// the persistence boundary. `id` is optional because a freshly created
/// project may come back from the backend without one, and that must not
/// crash the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i64>,
    pub name: String,
    pub domain: Option<String>,
    pub owner: Option<String>,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub current_step: Option<StepNumber>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// New pending project with just a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            domain: None,
            owner: None,
            description: None,
            status: ProjectStatus::Pending,
            current_step: Some(StepNumber::FIRST),
            created_at: None,
            updated_at: None,
        }
    }

    /// Derive the coherent step pointer for a status and a raw persisted
    /// step value
    ///
    /// Pending forces step 1; in-progress clamps into `[1,7]`; completed
    /// pins to 7; canceled/removed have no step.
    #[must_use]
    pub fn derive_step(status: ProjectStatus, raw_step: Option<i64>) -> Option<StepNumber> {
        match status {
            ProjectStatus::Pending => Some(StepNumber::FIRST),
            ProjectStatus::InProgress => {
                Some(raw_step.map_or(StepNumber::FIRST, StepNumber::from_persisted))
            }
            ProjectStatus::Completed => Some(StepNumber::LAST),
            ProjectStatus::Canceled | ProjectStatus::Removed => None,
        }
    }

    /// The next-step label shown on the dashboard card
    #[inline]
    #[must_use]
    pub fn next_step_label(&self) -> String {
        next_step_label(self.status, self.current_step)
    }
}

/// Human-readable description of the next action for a status/step pair
///
/// The exact strings are part of the dashboard contract.
#[must_use]
pub fn next_step_label(status: ProjectStatus, step: Option<StepNumber>) -> String {
    match status {
        ProjectStatus::Pending => "Kick-off Step 1 · Define SCS Scope".to_string(),
        ProjectStatus::InProgress => {
            let step = step.unwrap_or(StepNumber::FIRST);
            format!("Resume Step {step} · {}", step.label())
        }
        ProjectStatus::Completed => "Archive evidence & publish traceability report".to_string(),
        ProjectStatus::Canceled | ProjectStatus::Removed => {
            "Next activity to be defined".to_string()
        }
    }
}
