//! ReSafety Record System
//!
//! Typed records for every artifact the seven-step safety-analysis method
//! produces, together with the reference codec that converts between code
//! lists and their human-editable delimited form.
//!
//! # Core Concepts
//!
//! - [`RecordId`]: catalog-local numeric identity, distinct from a record's
//!   human-facing code (`H1`, `SC-01`)
//! - [`CatalogRecord`] / [`CodedRecord`] / [`LinkedRecord`]: the trait seams
//!   the catalog and traceability layers operate through
//! - [`codes`]: `"H1, H2"` ⇄ `["H1", "H2"]` conversion with tolerant parsing
//!
//! # Example
//!
//! ```
//! use resafe_record::{codes, Hazard, LinkedRecord, RecordId};
//!
//! let hazard = Hazard {
//!     id: RecordId::new(1),
//!     code: "H1".to_string(),
//!     description: "Hypoglycemia triggered by over-infusion.".to_string(),
//!     linked_accidents: codes::split("A1, A2"),
//! };
//! assert_eq!(hazard.linked_codes(), &["A1", "A2"]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod codes;
mod record;
pub mod types;

pub use record::{CatalogRecord, CodedRecord, LinkedRecord, RecordId};
pub use types::constraint::{ConstraintStatus, ControllerConstraint};
pub use types::control::{ControlAction, FeedbackLoop};
pub use types::goal_model::{Actor, ActorKind, GoalLink, GoalLinkKind};
pub use types::model_sync::{
    IntegrationNote, ModelChange, TaskStatus, UpdateStatus, ValidationTask,
};
pub use types::scenario::{
    LossScenario, RequirementStatus, SafetyRequirement, ScenarioStatus, Severity,
};
pub use types::scope::{
    Accident, AnalysisObjective, Artefact, Hazard, Priority, ReferenceResource, Responsibility,
    SafetyConstraint, ScopeSummary, SystemComponent,
};
pub use types::uca::{UcaCategory, UnsafeControlAction};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
