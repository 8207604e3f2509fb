//! Wire shapes and their defaulting rules
//!
//! Every inbound field is optional or defaulted: persisted data is
//! untrusted, and a missing or unexpected field means "use the default",
//! never "fail the load". Reference lists travel as arrays of codes; the
//! delimited `"H1, H2"` form never crosses the wire.

use chrono::{DateTime, Utc};
use resafe_catalog::ProjectCatalogs;
use resafe_record::{
    Accident, Artefact, Hazard, RecordId, ReferenceResource, Responsibility, SafetyConstraint,
    ScopeSummary, SystemComponent,
};
use resafe_workflow::{Project, ProjectStatus};
use serde::{Deserialize, Serialize};

/// Minimal project summary as the backend lists it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSummaryDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub owner: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub current_step: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ProjectSummaryDto {
    /// Normalize into the domain record
    ///
    /// Unknown status strings fold to pending, the step pointer is derived
    /// coherently for the status, and unparseable timestamps become `None`.
    #[must_use]
    pub fn into_project(self) -> Project {
        let status = ProjectStatus::from_raw(self.status.as_deref().unwrap_or_default());
        let current_step = Project::derive_step(status, self.current_step);
        Project {
            id: self.id,
            name: self.name.unwrap_or_default(),
            domain: none_if_blank(self.domain),
            owner: none_if_blank(self.owner),
            description: none_if_blank(self.description),
            status,
            current_step,
            created_at: parse_timestamp(self.created_at.as_deref()),
            updated_at: parse_timestamp(self.updated_at.as_deref()),
        }
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Request body for creating a minimal project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    pub current_step: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateProjectRequest {
    /// New request with the mandatory fields; workflow always starts at
    /// step 1
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_step: 1,
            domain: None,
            owner: None,
            description: None,
        }
    }
}

/// Request body for a status update (fire-and-refresh)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub id: i64,
    pub status: String,
}

impl UpdateStatusRequest {
    /// Build from the canonical status vocabulary
    #[must_use]
    pub fn new(id: i64, status: ProjectStatus) -> Self {
        Self {
            id,
            status: status.as_str().to_string(),
        }
    }
}

/// Free-text scope summary fields on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSummaryDto {
    pub analysis_purpose: Option<String>,
    pub assumptions: Option<String>,
    pub system_definition: Option<String>,
    pub system_boundary: Option<String>,
    pub out_of_scope: Option<String>,
}

impl GeneralSummaryDto {
    fn into_summary(self) -> ScopeSummary {
        ScopeSummary {
            analysis_purpose: self.analysis_purpose.unwrap_or_default(),
            assumptions: self.assumptions.unwrap_or_default(),
            system_definition: self.system_definition.unwrap_or_default(),
            system_boundary: self.system_boundary.unwrap_or_default(),
            out_of_scope: self.out_of_scope.unwrap_or_default(),
        }
    }

    fn from_summary(summary: &ScopeSummary) -> Self {
        Self {
            analysis_purpose: Some(summary.analysis_purpose.clone()),
            assumptions: Some(summary.assumptions.clone()),
            system_definition: Some(summary.system_definition.clone()),
            system_boundary: Some(summary.system_boundary.clone()),
            out_of_scope: Some(summary.out_of_scope.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceDto {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemComponentDto {
    pub id: u64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccidentDto {
    pub id: u64,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HazardDto {
    pub id: u64,
    pub code: String,
    pub description: String,
    pub linked_accidents: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SafetyConstraintDto {
    pub id: u64,
    pub code: String,
    pub statement: String,
    pub linked_hazards: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsibilityDto {
    pub id: u64,
    pub component: String,
    pub responsibility: String,
    pub linked_constraints: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtefactDto {
    pub id: u64,
    pub name: String,
    pub purpose: String,
    pub reference: String,
}

/// The full step-1 scope snapshot, keyed by project id
///
/// An empty or absent snapshot on load signals "start from defaults", not
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeSnapshotDto {
    pub id: Option<i64>,
    pub last_updated_by: Option<String>,
    pub general_summary: Option<GeneralSummaryDto>,
    /// Free-text analysis objectives blob
    pub objectives: Option<String>,
    pub resources: Vec<ResourceDto>,
    pub system_components: Vec<SystemComponentDto>,
    pub accidents: Vec<AccidentDto>,
    pub hazards: Vec<HazardDto>,
    pub safety_constraints: Vec<SafetyConstraintDto>,
    pub responsibilities: Vec<ResponsibilityDto>,
    pub artefacts: Vec<ArtefactDto>,
}

impl ScopeSnapshotDto {
    /// Whether the snapshot carries any content at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.general_summary.is_none()
            && self.objectives.is_none()
            && self.resources.is_empty()
            && self.system_components.is_empty()
            && self.accidents.is_empty()
            && self.hazards.is_empty()
            && self.safety_constraints.is_empty()
            && self.responsibilities.is_empty()
            && self.artefacts.is_empty()
    }

    /// Replace the step-1 collections of `catalogs` with this snapshot
    ///
    /// Each collection is hydrated atomically via `replace_all`, which also
    /// reseeds its id sequencer. Collections absent from the snapshot
    /// hydrate empty.
    pub fn hydrate(self, catalogs: &mut ProjectCatalogs) {
        catalogs.scope_summary = self
            .general_summary
            .map(GeneralSummaryDto::into_summary)
            .unwrap_or_default();
        catalogs.objectives_text = self.objectives.unwrap_or_default();

        catalogs.resources.replace_all(
            self.resources
                .into_iter()
                .map(|dto| ReferenceResource {
                    id: RecordId::new(dto.id),
                    name: dto.name,
                    category: dto.category,
                    reference: dto.reference,
                })
                .collect(),
        );
        catalogs.system_components.replace_all(
            self.system_components
                .into_iter()
                .map(|dto| SystemComponent {
                    id: RecordId::new(dto.id),
                    name: dto.name,
                    description: dto.description,
                })
                .collect(),
        );
        catalogs.accidents.replace_all(
            self.accidents
                .into_iter()
                .map(|dto| Accident {
                    id: RecordId::new(dto.id),
                    code: dto.code,
                    description: dto.description,
                })
                .collect(),
        );
        catalogs.hazards.replace_all(
            self.hazards
                .into_iter()
                .map(|dto| Hazard {
                    id: RecordId::new(dto.id),
                    code: dto.code,
                    description: dto.description,
                    linked_accidents: dto.linked_accidents,
                })
                .collect(),
        );
        catalogs.safety_constraints.replace_all(
            self.safety_constraints
                .into_iter()
                .map(|dto| SafetyConstraint {
                    id: RecordId::new(dto.id),
                    code: dto.code,
                    statement: dto.statement,
                    linked_hazards: dto.linked_hazards,
                })
                .collect(),
        );
        catalogs.responsibilities.replace_all(
            self.responsibilities
                .into_iter()
                .map(|dto| Responsibility {
                    id: RecordId::new(dto.id),
                    component: dto.component,
                    responsibility: dto.responsibility,
                    linked_constraints: dto.linked_constraints,
                })
                .collect(),
        );
        catalogs.artefacts.replace_all(
            self.artefacts
                .into_iter()
                .map(|dto| Artefact {
                    id: RecordId::new(dto.id),
                    name: dto.name,
                    purpose: dto.purpose,
                    reference: dto.reference,
                })
                .collect(),
        );
    }

    /// Capture the step-1 collections of `catalogs` into a snapshot
    #[must_use]
    pub fn capture(
        project_id: i64,
        catalogs: &ProjectCatalogs,
        last_updated_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(project_id),
            last_updated_by: Some(last_updated_by.into()),
            general_summary: Some(GeneralSummaryDto::from_summary(&catalogs.scope_summary)),
            objectives: Some(catalogs.objectives_text.clone()),
            resources: catalogs
                .resources
                .iter()
                .map(|r| ResourceDto {
                    id: r.id.value(),
                    name: r.name.clone(),
                    category: r.category.clone(),
                    reference: r.reference.clone(),
                })
                .collect(),
            system_components: catalogs
                .system_components
                .iter()
                .map(|c| SystemComponentDto {
                    id: c.id.value(),
                    name: c.name.clone(),
                    description: c.description.clone(),
                })
                .collect(),
            accidents: catalogs
                .accidents
                .iter()
                .map(|a| AccidentDto {
                    id: a.id.value(),
                    code: a.code.clone(),
                    description: a.description.clone(),
                })
                .collect(),
            hazards: catalogs
                .hazards
                .iter()
                .map(|h| HazardDto {
                    id: h.id.value(),
                    code: h.code.clone(),
                    description: h.description.clone(),
                    linked_accidents: h.linked_accidents.clone(),
                })
                .collect(),
            safety_constraints: catalogs
                .safety_constraints
                .iter()
                .map(|c| SafetyConstraintDto {
                    id: c.id.value(),
                    code: c.code.clone(),
                    statement: c.statement.clone(),
                    linked_hazards: c.linked_hazards.clone(),
                })
                .collect(),
            responsibilities: catalogs
                .responsibilities
                .iter()
                .map(|r| ResponsibilityDto {
                    id: r.id.value(),
                    component: r.component.clone(),
                    responsibility: r.responsibility.clone(),
                    linked_constraints: r.linked_constraints.clone(),
                })
                .collect(),
            artefacts: catalogs
                .artefacts
                .iter()
                .map(|a| ArtefactDto {
                    id: a.id.value(),
                    name: a.name.clone(),
                    purpose: a.purpose.clone(),
                    reference: a.reference.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use resafe_workflow::StepNumber;

    #[test]
    fn summary_normalizes_reopened_to_in_progress() {
        let dto = ProjectSummaryDto {
            id: Some(3),
            name: Some("IIP".into()),
            status: Some("REOPENED".into()),
            current_step: Some(4),
            ..Default::default()
        };

        let project = dto.into_project();
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.current_step, StepNumber::new(4));
    }

    #[test]
    fn summary_defaults_unknown_status_to_pending_step_one() {
        let dto = ProjectSummaryDto {
            status: Some("archived".into()),
            current_step: Some(5),
            ..Default::default()
        };

        let project = dto.into_project();
        assert_eq!(project.status, ProjectStatus::Pending);
        assert_eq!(project.current_step, Some(StepNumber::FIRST));
    }

    #[test]
    fn summary_tolerates_a_nearly_empty_payload() {
        let project: Project =
            serde_json::from_str::<ProjectSummaryDto>("{}").unwrap().into_project();

        assert_eq!(project.id, None);
        assert!(project.name.is_empty());
        assert_eq!(project.status, ProjectStatus::Pending);
    }

    #[test]
    fn summary_parses_rfc3339_and_drops_junk_timestamps() {
        let dto = ProjectSummaryDto {
            created_at: Some("2026-08-01T09:30:00Z".into()),
            updated_at: Some("yesterday-ish".into()),
            ..Default::default()
        };

        let project = dto.into_project();
        assert!(project.created_at.is_some());
        assert!(project.updated_at.is_none());
    }

    #[test]
    fn summary_blank_optionals_become_none() {
        let dto = ProjectSummaryDto {
            domain: Some("  ".into()),
            owner: Some("Safety Lead".into()),
            ..Default::default()
        };

        let project = dto.into_project();
        assert_eq!(project.domain, None);
        assert_eq!(project.owner.as_deref(), Some("Safety Lead"));
    }

    #[test]
    fn create_request_serializes_without_absent_optionals() {
        let request = CreateProjectRequest::new("Insulin Infusion Pump");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["name"], "Insulin Infusion Pump");
        assert_eq!(json["currentStep"], 1);
        assert!(json.get("domain").is_none());
    }

    #[test]
    fn snapshot_roundtrips_through_catalogs() {
        let wire = serde_json::json!({
            "generalSummary": { "systemDefinition": "A safety-critical infusion device." },
            "objectives": "Clarify scope for high-risk scenarios.",
            "accidents": [
                { "id": 1, "code": "A1", "description": "Risk of death." }
            ],
            "hazards": [
                { "id": 1, "code": "H1", "description": "Hypoglycemia.",
                  "linkedAccidents": ["A1"] }
            ]
        });
        let snapshot: ScopeSnapshotDto = serde_json::from_value(wire).unwrap();

        let mut catalogs = ProjectCatalogs::new();
        snapshot.hydrate(&mut catalogs);

        assert_eq!(
            catalogs.scope_summary.system_definition,
            "A safety-critical infusion device."
        );
        assert_eq!(catalogs.hazards.len(), 1);
        assert_eq!(
            catalogs.hazards.find_by_code("H1").unwrap().linked_accidents,
            vec!["A1".to_string()]
        );

        let captured = ScopeSnapshotDto::capture(9, &catalogs, "admin");
        assert_eq!(captured.id, Some(9));
        assert_eq!(captured.accidents.len(), 1);
        assert_eq!(captured.hazards[0].linked_accidents, vec!["A1".to_string()]);
    }

    #[test]
    fn hydration_reseeds_sequencers_past_wire_ids() {
        let snapshot = ScopeSnapshotDto {
            accidents: vec![AccidentDto {
                id: 6,
                code: "A6".into(),
                description: String::new(),
            }],
            ..Default::default()
        };

        let mut catalogs = ProjectCatalogs::new();
        snapshot.hydrate(&mut catalogs);

        let next = catalogs.accidents.add(|id| Accident {
            id,
            code: "A7".into(),
            description: String::new(),
        });
        assert_eq!(next, RecordId::new(7));
    }

    #[test]
    fn empty_snapshot_reports_empty() {
        assert!(ScopeSnapshotDto::default().is_empty());
        let with_content = ScopeSnapshotDto {
            objectives: Some("x".into()),
            ..Default::default()
        };
        assert!(!with_content.is_empty());
    }
}
