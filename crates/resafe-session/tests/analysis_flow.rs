//! End-to-end flows over a pre-populated in-memory backend.

use std::sync::Arc;

use resafe_gateway::{InMemoryGateway, PersistenceGateway};
use resafe_record::Hazard;
use resafe_session::{AnalysisSession, SessionError};
use resafe_test_utils::{demo_project_summaries, demo_snapshot, init_tracing};
use resafe_workflow::{ProjectStatus, StepNumber, StepRoute};

async fn seeded_session() -> AnalysisSession<InMemoryGateway> {
    init_tracing();
    let gateway = Arc::new(InMemoryGateway::with_projects(demo_project_summaries()));
    gateway.save_scope(demo_snapshot(1)).await.unwrap();

    let mut session = AnalysisSession::new(gateway);
    session.refresh_projects().await.unwrap();
    session
}

#[tokio::test]
async fn refresh_normalizes_backend_statuses() {
    let session = seeded_session().await;
    let projects = session.projects();
    assert_eq!(projects.len(), 3);

    // "REOPENED" folds to in-progress, and its out-of-range step clamps.
    let legacy = projects.iter().find(|p| p.name == "Legacy Import").unwrap();
    assert_eq!(legacy.status, ProjectStatus::InProgress);
    assert_eq!(legacy.current_step, Some(StepNumber::FIRST));
    assert_eq!(legacy.next_step_label(), "Resume Step 1 · Scope Definition");

    let active = projects
        .iter()
        .find(|p| p.name == "Insulin Infusion Pump")
        .unwrap();
    assert_eq!(
        active.next_step_label(),
        "Resume Step 4 · Unsafe Control Actions"
    );
}

#[tokio::test]
async fn resume_lands_on_the_remembered_step() {
    let mut session = seeded_session().await;

    let route = session.open_project(1).await.unwrap();
    assert_eq!(route, StepRoute::Ucas);

    // The stored snapshot hydrated the scope collections.
    let catalogs = session.catalogs().unwrap();
    assert_eq!(catalogs.accidents.len(), 2);
    assert_eq!(catalogs.hazards.len(), 2);
    assert!(session.audit().unwrap().is_empty());
}

#[tokio::test]
async fn hydrated_ids_do_not_collide_with_new_records() {
    let mut session = seeded_session().await;
    session.open_project(1).await.unwrap();

    let id = session
        .add_hazard("H3", "Occlusion goes undetected.", "A2")
        .unwrap();

    // Two hazards came from the snapshot; the next id continues past them.
    assert_eq!(id.value(), 3);
    let hazards: Vec<&Hazard> = session.catalogs().unwrap().hazards.iter().collect();
    assert_eq!(hazards[0].code, "H3");
}

#[tokio::test]
async fn dangling_reference_survives_save_and_reload() {
    let mut session = seeded_session().await;
    session.open_project(1).await.unwrap();
    session
        .add_hazard("H3", "Sensor drift goes unnoticed.", "A1, A9")
        .unwrap();

    session.save_scope().await.unwrap();
    session.close_project();
    session.open_project(1).await.unwrap();

    // The gap is still visible after the round trip, exactly as written.
    let warnings = session.audit().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].source, "H3");
    assert_eq!(warnings[0].missing, vec!["A9".to_string()]);
}

#[tokio::test]
async fn pending_project_kicks_off_at_scope() {
    let mut session = seeded_session().await;

    let route = session.open_project(2).await.unwrap();
    assert_eq!(route, StepRoute::Scope);
    assert_eq!(
        session.lifecycle().unwrap().status(),
        ProjectStatus::InProgress
    );
    // No snapshot stored for this project: blank defaults.
    assert!(session.catalogs().unwrap().accidents.is_empty());
}

#[tokio::test]
async fn opening_an_unknown_project_is_an_error() {
    let mut session = seeded_session().await;
    assert!(matches!(
        session.open_project(99).await,
        Err(SessionError::UnknownProject(99))
    ));
    assert!(session.active_project_id().is_none());
}

#[tokio::test]
async fn cancel_then_remove_clears_the_dashboard_row() {
    let mut session = seeded_session().await;
    session.open_project(2).await.unwrap();

    session.cancel_active().await.unwrap();
    let canceled = session
        .projects()
        .iter()
        .find(|p| p.id == Some(2))
        .unwrap();
    assert_eq!(canceled.status, ProjectStatus::Canceled);
    assert_eq!(canceled.next_step_label(), "Next activity to be defined");

    session.remove_active().await.unwrap();
    assert!(session.projects().iter().all(|p| p.id != Some(2)));
}
