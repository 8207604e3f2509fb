//! Per-project catalog bundle

use crate::catalog::Catalog;
use resafe_record::{
    Accident, Actor, AnalysisObjective, Artefact, ControlAction, ControllerConstraint,
    FeedbackLoop, GoalLink, Hazard, IntegrationNote, LossScenario, ModelChange,
    ReferenceResource, Responsibility, SafetyConstraint, SafetyRequirement, ScopeSummary,
    SystemComponent, UnsafeControlAction, ValidationTask,
};

/// Every collection the open project owns, one catalog per record type
///
/// This is the single source of truth for the loaded project. One instance
/// exists per open project and is injected wherever record access is needed;
/// the lifecycle layer and persistence boundary never reach into it behind
/// the owner's back.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalogs {
    // Step 1 - scope
    pub objectives: Catalog<AnalysisObjective>,
    pub resources: Catalog<ReferenceResource>,
    pub system_components: Catalog<SystemComponent>,
    pub accidents: Catalog<Accident>,
    pub hazards: Catalog<Hazard>,
    pub safety_constraints: Catalog<SafetyConstraint>,
    pub responsibilities: Catalog<Responsibility>,
    pub artefacts: Catalog<Artefact>,
    /// Free-text scope summary fields saved with the step-1 snapshot
    pub scope_summary: ScopeSummary,
    /// Free-text analysis objectives blob (kept verbatim from the form)
    pub objectives_text: String,

    // Step 2 - goal models
    pub actors: Catalog<Actor>,
    pub goal_links: Catalog<GoalLink>,

    // Step 3 - control structure
    pub control_actions: Catalog<ControlAction>,
    pub feedback_loops: Catalog<FeedbackLoop>,

    // Step 4 - unsafe control actions
    pub ucas: Catalog<UnsafeControlAction>,

    // Step 5 - controller constraints
    pub controller_constraints: Catalog<ControllerConstraint>,

    // Step 6 - loss scenarios & requirements
    pub loss_scenarios: Catalog<LossScenario>,
    pub safety_requirements: Catalog<SafetyRequirement>,

    // Step 7 - model synchronization
    pub model_changes: Catalog<ModelChange>,
    pub validation_tasks: Catalog<ValidationTask>,
    pub integration_notes: Catalog<IntegrationNote>,
}

impl ProjectCatalogs {
    /// Empty bundle, every collection at its seed state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the step-1 scope collections and summary to the blank state
    ///
    /// Used when the analyst explicitly starts the scope from scratch; the
    /// later-step collections are untouched.
    pub fn reset_scope(&mut self) {
        self.objectives.clear();
        self.resources.clear();
        self.system_components.clear();
        self.accidents.clear();
        self.hazards.clear();
        self.safety_constraints.clear();
        self.responsibilities.clear();
        self.artefacts.clear();
        self.scope_summary = ScopeSummary::default();
        self.objectives_text.clear();
    }
}
