//! Step 6 records - loss scenarios and safety requirements

use crate::record::{CatalogRecord, CodedRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Severity of a loss scenario's outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Major,
    Catastrophic,
}

impl Severity {
    /// Normalize a free-form severity string, defaulting to `Major`
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "minor" => Self::Minor,
            "moderate" => Self::Moderate,
            "catastrophic" => Self::Catastrophic,
            _ => Self::Major,
        }
    }
}

/// Disposition of a loss scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    #[default]
    Open,
    Mitigated,
    Accepted,
}

/// Lifecycle of a derived safety requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementStatus {
    #[default]
    Draft,
    InReview,
    Implemented,
}

/// A causal scenario by which an unsafe control action leads to a loss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossScenario {
    pub id: RecordId,
    /// Human-facing code, `LS-07` by convention
    pub code: Option<String>,
    pub uca: String,
    pub hazard: String,
    pub outcome: String,
    pub severity: Severity,
    /// Free-text mitigation summaries (not code references)
    pub mitigations: Vec<String>,
    pub status: ScenarioStatus,
}

impl CatalogRecord for LossScenario {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl CodedRecord for LossScenario {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// A safety requirement derived from a loss scenario
///
/// Links to its scenario by record id, not by code; the id travels in the
/// persisted snapshot so the audit checks id membership for this edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRequirement {
    pub id: RecordId,
    /// Human-facing code, `SR-01` by convention
    pub code: Option<String>,
    pub title: String,
    pub linked_scenario: RecordId,
    pub category: String,
    pub owner: String,
    pub due_date: String,
    pub status: RequirementStatus,
}

impl CatalogRecord for SafetyRequirement {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl CodedRecord for SafetyRequirement {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_normalizes_unknown_to_major() {
        assert_eq!(Severity::from_raw("catastrophic"), Severity::Catastrophic);
        assert_eq!(Severity::from_raw("terrible"), Severity::Major);
    }

    #[test]
    fn severity_orders_by_magnitude() {
        assert!(Severity::Minor < Severity::Catastrophic);
    }

    #[test]
    fn requirement_status_serializes_kebab_case() {
        let json = serde_json::to_string(&RequirementStatus::InReview).unwrap();
        assert_eq!(json, "\"in-review\"");
    }
}
