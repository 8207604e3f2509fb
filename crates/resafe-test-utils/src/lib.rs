//! Testing utilities for the ReSafety workspace
//!
//! Shared fixtures and helpers. The demo data is the insulin infusion pump
//! analysis the workbench ships as its worked example.

#![allow(missing_docs)]

use once_cell::sync::OnceCell;
use resafe_catalog::ProjectCatalogs;
use resafe_gateway::{ProjectSummaryDto, ScopeSnapshotDto};
use resafe_record::{
    Accident, Hazard, ReferenceResource, Responsibility, SafetyConstraint, SystemComponent,
};

static TRACING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber honoring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Step-1 catalogs seeded with the insulin-pump worked example
///
/// The traceability chain is complete: every hazard traces to an accident,
/// every constraint to a hazard, every responsibility to a constraint.
pub fn demo_scope_catalogs() -> ProjectCatalogs {
    let mut catalogs = ProjectCatalogs::new();

    catalogs.scope_summary.system_definition = "The IIP is a safety-critical device that \
        automates basal and bolus insulin delivery to support Type 1 Diabetes management."
        .to_string();

    catalogs.resources.replace_all(vec![
        ReferenceResource {
            id: 1.into(),
            name: "Martinazzo (2022) - STPA of Insulin Pumps".into(),
            category: "Manual".into(),
            reference: "martinazzo-2022-stpa-insulin.pdf".into(),
        },
        ReferenceResource {
            id: 2.into(),
            name: "Leveson & Thomas (2018)".into(),
            category: "Book".into(),
            reference: "Engineering a Safer World".into(),
        },
    ]);

    catalogs.system_components.replace_all(vec![
        SystemComponent {
            id: 1.into(),
            name: "Patient (Human Controller)".into(),
            description: "Configures infusion parameters and supervises therapy.".into(),
        },
        SystemComponent {
            id: 2.into(),
            name: "Insulin Pump".into(),
            description: "Executes basal/bolus delivery and enforces configuration constraints."
                .into(),
        },
        SystemComponent {
            id: 3.into(),
            name: "Infusion Set".into(),
            description: "Provides the physical channel for insulin delivery.".into(),
        },
    ]);

    catalogs.accidents.replace_all(vec![
        Accident {
            id: 1.into(),
            code: "A1".into(),
            description: "Risk of death due to insulin mismanagement.".into(),
        },
        Accident {
            id: 2.into(),
            code: "A2".into(),
            description: "Risk of serious injury caused by inadequate insulin delivery.".into(),
        },
    ]);

    catalogs.hazards.replace_all(vec![
        Hazard {
            id: 1.into(),
            code: "H1".into(),
            description: "Hypoglycemia triggered by over-infusion or unintended dosing.".into(),
            linked_accidents: vec!["A1".into(), "A2".into()],
        },
        Hazard {
            id: 2.into(),
            code: "H2".into(),
            description: "Hyperglycemia caused by missed or delayed insulin delivery.".into(),
            linked_accidents: vec!["A2".into()],
        },
    ]);

    catalogs.safety_constraints.replace_all(vec![
        SafetyConstraint {
            id: 1.into(),
            code: "SC-01".into(),
            statement: "The system must not administer insulin beyond validated dosage \
                schedules or in unintended contexts."
                .into(),
            linked_hazards: vec!["H1".into()],
        },
        SafetyConstraint {
            id: 2.into(),
            code: "SC-02".into(),
            statement: "The system must assure the correct insulin dose is delivered at the \
                intended time."
                .into(),
            linked_hazards: vec!["H2".into()],
        },
    ]);

    catalogs.responsibilities.replace_all(vec![
        Responsibility {
            id: 1.into(),
            component: "Patient (Human Controller)".into(),
            responsibility: "Configure infusion settings in accordance with the prescription."
                .into(),
            linked_constraints: vec!["SC-01".into(), "SC-02".into()],
        },
        Responsibility {
            id: 2.into(),
            component: "Insulin Pump".into(),
            responsibility: "Administer insulin only according to validated parameters.".into(),
            linked_constraints: vec!["SC-01".into()],
        },
        Responsibility {
            id: 3.into(),
            component: "Infusion Set".into(),
            responsibility: "Maintain physical integrity to prevent unintended flow.".into(),
            linked_constraints: vec!["SC-01".into()],
        },
    ]);

    catalogs
}

/// The demo catalogs captured as a wire snapshot for the given project
pub fn demo_snapshot(project_id: i64) -> ScopeSnapshotDto {
    ScopeSnapshotDto::capture(project_id, &demo_scope_catalogs(), "admin")
}

/// A small mixed-status project list as the backend would return it
pub fn demo_project_summaries() -> Vec<ProjectSummaryDto> {
    vec![
        ProjectSummaryDto {
            id: Some(1),
            name: Some("Insulin Infusion Pump".into()),
            domain: Some("Medical Devices".into()),
            owner: Some("Safety Engineering Lead".into()),
            status: Some("in-progress".into()),
            current_step: Some(4),
            ..Default::default()
        },
        ProjectSummaryDto {
            id: Some(2),
            name: Some("Urban Shuttle".into()),
            status: Some("pending".into()),
            ..Default::default()
        },
        ProjectSummaryDto {
            id: Some(3),
            name: Some("Legacy Import".into()),
            status: Some("REOPENED".into()),
            current_step: Some(12),
            ..Default::default()
        },
    ]
}
