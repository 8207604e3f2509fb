//! Step 5 records - controller constraints

use crate::record::{CatalogRecord, LinkedRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Review status of a controller constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConstraintStatus {
    #[default]
    Draft,
    Approved,
    #[serde(rename = "Pending Review")]
    PendingReview,
}

impl ConstraintStatus {
    /// Normalize a free-form status string, defaulting to `Draft`
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Approved" => Self::Approved,
            "Pending Review" => Self::PendingReview,
            _ => Self::Draft,
        }
    }
}

/// A constraint inverting one or more unsafe control actions into required
/// controller behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConstraint {
    pub id: RecordId,
    /// UCA codes this constraint inverts
    pub uca_refs: Vec<String>,
    pub constraint: String,
    pub enforcement_mechanism: String,
    pub status: ConstraintStatus,
}

impl CatalogRecord for ControllerConstraint {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl LinkedRecord for ControllerConstraint {
    fn linked_codes(&self) -> &[String] {
        &self.uca_refs
    }
}
