//! Step 1 records - scope definition
//!
//! The scope step produces the widest spread of artifacts: analysis
//! objectives, reference resources, system components, and the start of the
//! traceability chain (accidents ← hazards ← safety constraints ←
//! responsibilities), plus supporting artefacts and the free-text summary.

use crate::record::{CatalogRecord, CodedRecord, LinkedRecord, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Objective priority as the analyst ranks it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Normalize a free-form priority string, defaulting to `Medium`
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "High" => Self::High,
            "Low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        f.write_str(label)
    }
}

/// An analysis objective: what this iteration of the method should clarify
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisObjective {
    pub id: RecordId,
    pub focus: String,
    pub stakeholder: String,
    pub priority: Priority,
}

impl CatalogRecord for AnalysisObjective {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A reference resource backing the analysis (manual, standard, paper, repo)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceResource {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub reference: String,
}

impl CatalogRecord for ReferenceResource {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A system component inside the analysis boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemComponent {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

impl CatalogRecord for SystemComponent {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// An accident: the loss the analysis exists to prevent
///
/// Root of the traceability chain; hazards reference accidents by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accident {
    pub id: RecordId,
    /// Human-facing code, `A1` by convention
    pub code: String,
    pub description: String,
}

impl CatalogRecord for Accident {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl CodedRecord for Accident {
    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

/// A hazard: a system state that can lead to one or more accidents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: RecordId,
    /// Human-facing code, `H1` by convention
    pub code: String,
    pub description: String,
    /// Accident codes this hazard traces to
    pub linked_accidents: Vec<String>,
}

impl CatalogRecord for Hazard {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl CodedRecord for Hazard {
    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl LinkedRecord for Hazard {
    fn linked_codes(&self) -> &[String] {
        &self.linked_accidents
    }
}

/// A safety constraint derived from one or more hazards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyConstraint {
    pub id: RecordId,
    /// Human-facing code, `SC-01` by convention
    pub code: String,
    pub statement: String,
    /// Hazard codes this constraint mitigates
    pub linked_hazards: Vec<String>,
}

impl CatalogRecord for SafetyConstraint {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl CodedRecord for SafetyConstraint {
    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

impl LinkedRecord for SafetyConstraint {
    fn linked_codes(&self) -> &[String] {
        &self.linked_hazards
    }
}

/// A responsibility a component carries toward one or more constraints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsibility {
    pub id: RecordId,
    pub component: String,
    pub responsibility: String,
    /// Safety-constraint codes this responsibility enforces
    pub linked_constraints: Vec<String>,
}

impl CatalogRecord for Responsibility {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl LinkedRecord for Responsibility {
    fn linked_codes(&self) -> &[String] {
        &self.linked_constraints
    }
}

/// A supporting artefact (dossier, report, evidence pointer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artefact {
    pub id: RecordId,
    pub name: String,
    pub purpose: String,
    pub reference: String,
}

impl CatalogRecord for Artefact {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Free-text scope summary fields
///
/// Kept alongside the coded collections in the step-1 snapshot; all fields
/// default to empty, matching the "start from defaults" load semantics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeSummary {
    pub analysis_purpose: String,
    pub assumptions: String,
    pub system_definition: String,
    pub system_boundary: String,
    pub out_of_scope: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_normalizes_unknown_to_medium() {
        assert_eq!(Priority::from_raw("High"), Priority::High);
        assert_eq!(Priority::from_raw("Low"), Priority::Low);
        assert_eq!(Priority::from_raw("urgent"), Priority::Medium);
        assert_eq!(Priority::from_raw(""), Priority::Medium);
    }

    #[test]
    fn hazard_exposes_link_seam() {
        let hazard = Hazard {
            id: RecordId::new(1),
            code: "H1".into(),
            description: "Hypoglycemia triggered by over-infusion.".into(),
            linked_accidents: vec!["A1".into(), "A2".into()],
        };
        assert_eq!(hazard.code(), Some("H1"));
        assert_eq!(hazard.linked_codes(), &["A1", "A2"]);
    }

    #[test]
    fn scope_summary_defaults_empty() {
        let summary = ScopeSummary::default();
        assert!(summary.system_definition.is_empty());
        assert!(summary.out_of_scope.is_empty());
    }
}
