//! The analysis session orchestrator

use crate::draft::ProjectDraft;
use crate::error::SessionError;
use resafe_catalog::ProjectCatalogs;
use resafe_gateway::{PersistenceGateway, ScopeSnapshotDto, UpdateStatusRequest};
use resafe_record::{
    codes, ControllerConstraint, ConstraintStatus, Hazard, RecordId, Responsibility,
    SafetyConstraint,
};
use resafe_trace::TraceWarning;
use resafe_workflow::{
    validate_transition, Project, ProjectLifecycle, ProjectStatus, StepNumber, StepRoute,
};
use std::sync::Arc;
use uuid::Uuid;

/// Session-level configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Identity stamped into `lastUpdatedBy` on saved snapshots
    pub editor: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            editor: "admin".to_string(),
        }
    }
}

/// Handle for one in-flight scope load
///
/// A load applies only while its ticket is still the session's current one;
/// a newer `begin_load` (or closing the project) supersedes it, and the
/// stale completion is ignored rather than applied after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    project_id: i64,
    token: Uuid,
}

impl LoadTicket {
    /// The project this load is for
    #[inline]
    #[must_use]
    pub fn project_id(self) -> i64 {
        self.project_id
    }
}

/// What happened to a load completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The snapshot (or blank default) was applied
    Applied,
    /// The load was superseded; nothing changed
    Stale,
}

#[derive(Debug)]
struct ActiveProject {
    id: i64,
    lifecycle: ProjectLifecycle,
    catalogs: ProjectCatalogs,
}

/// One analyst's working session
///
/// Owns the loaded project list and, once a project is open, its catalogs
/// and lifecycle. The gateway is injected; one session exists per analyst
/// and one catalog bundle per open project; nothing here is global.
#[derive(Debug)]
pub struct AnalysisSession<G> {
    config: SessionConfig,
    gateway: Arc<G>,
    projects: Vec<Project>,
    active: Option<ActiveProject>,
    pending_load: Option<LoadTicket>,
}

impl<G: PersistenceGateway> AnalysisSession<G> {
    /// New session over a gateway, with default configuration
    #[must_use]
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_config(gateway, SessionConfig::default())
    }

    /// New session with explicit configuration
    #[must_use]
    pub fn with_config(gateway: Arc<G>, config: SessionConfig) -> Self {
        Self {
            config,
            gateway,
            projects: Vec::new(),
            active: None,
            pending_load: None,
        }
    }

    /// The loaded project list, as last refreshed
    #[inline]
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Id of the open project, if any
    #[inline]
    #[must_use]
    pub fn active_project_id(&self) -> Option<i64> {
        self.active.as_ref().map(|a| a.id)
    }

    /// Catalogs of the open project
    ///
    /// # Errors
    /// Requires an open project.
    pub fn catalogs(&self) -> Result<&ProjectCatalogs, SessionError> {
        self.active
            .as_ref()
            .map(|a| &a.catalogs)
            .ok_or(SessionError::NoActiveProject)
    }

    /// Mutable catalogs of the open project
    ///
    /// # Errors
    /// Requires an open project.
    pub fn catalogs_mut(&mut self) -> Result<&mut ProjectCatalogs, SessionError> {
        self.active
            .as_mut()
            .map(|a| &mut a.catalogs)
            .ok_or(SessionError::NoActiveProject)
    }

    /// Lifecycle of the open project
    ///
    /// # Errors
    /// Requires an open project.
    pub fn lifecycle(&self) -> Result<&ProjectLifecycle, SessionError> {
        self.active
            .as_ref()
            .map(|a| &a.lifecycle)
            .ok_or(SessionError::NoActiveProject)
    }

    /// Reload the open-project list from the gateway
    ///
    /// Summaries are normalized on the way in (unknown statuses fold to
    /// pending, steps are clamped). On failure the list degrades to empty
    /// and the error is surfaced.
    ///
    /// # Errors
    /// Gateway failures.
    pub async fn refresh_projects(&mut self) -> Result<usize, SessionError> {
        match self.gateway.list_open_projects().await {
            Ok(summaries) => {
                self.projects = summaries
                    .into_iter()
                    .map(resafe_gateway::ProjectSummaryDto::into_project)
                    .collect();
                tracing::info!(count = self.projects.len(), "refreshed project list");
                Ok(self.projects.len())
            }
            Err(error) => {
                tracing::warn!(%error, "project list load failed; showing empty list");
                self.projects.clear();
                Err(error.into())
            }
        }
    }

    /// Validate a draft and create the project (fire-and-refresh)
    ///
    /// An invalid draft mutates nothing and never reaches the gateway. The
    /// created record may come back without an id; that is tolerated.
    ///
    /// # Errors
    /// Validation failures and gateway failures.
    pub async fn create_project(&mut self, draft: ProjectDraft) -> Result<Project, SessionError> {
        let request = draft.into_request()?;
        let created = self.gateway.create_minimal(request).await?;
        let project = created.into_project();
        tracing::info!(name = %project.name, id = ?project.id, "created project");

        if let Err(error) = self.refresh_projects().await {
            tracing::warn!(%error, "refresh after create failed");
        }
        Ok(project)
    }

    /// Update a listed project's status (fire-and-refresh)
    ///
    /// The transition is validated against the lifecycle table before
    /// anything is sent.
    ///
    /// # Errors
    /// Unknown ids, illegal transitions, gateway failures.
    pub async fn update_status(
        &mut self,
        id: i64,
        status: ProjectStatus,
    ) -> Result<(), SessionError> {
        let current = self
            .projects
            .iter()
            .find(|p| p.id == Some(id))
            .ok_or(SessionError::UnknownProject(id))?;
        validate_transition(current.status, status)?;

        self.gateway
            .update_status(UpdateStatusRequest::new(id, status))
            .await?;
        if let Err(error) = self.refresh_projects().await {
            tracing::warn!(%error, "refresh after status update failed");
        }
        Ok(())
    }

    /// Open a project for work: start/resume its lifecycle, then load its
    /// scope snapshot
    ///
    /// A failed or empty snapshot load is not fatal: the catalogs start
    /// from blank defaults and the analyst keeps working; the failure is
    /// logged. Returns the route of the step to land on.
    ///
    /// # Errors
    /// Unknown ids and illegal lifecycle starts (completed/canceled
    /// projects do not reopen through this path).
    pub async fn open_project(&mut self, id: i64) -> Result<StepRoute, SessionError> {
        let summary = self
            .projects
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or(SessionError::UnknownProject(id))?;

        let mut lifecycle = ProjectLifecycle::new(summary);
        let route = lifecycle.start()?;
        self.active = Some(ActiveProject {
            id,
            lifecycle,
            catalogs: ProjectCatalogs::new(),
        });

        let ticket = self.begin_load(id);
        match self.gateway.load_scope(id).await {
            Ok(snapshot) => {
                self.apply_snapshot(ticket, snapshot);
            }
            Err(error) => {
                tracing::warn!(%error, project_id = id, "scope load failed; starting from defaults");
                self.apply_snapshot(ticket, None);
            }
        }

        tracing::info!(project_id = id, route = %route, "opened project");
        Ok(route)
    }

    /// Stamp a new in-flight load, superseding any previous one
    pub fn begin_load(&mut self, project_id: i64) -> LoadTicket {
        let ticket = LoadTicket {
            project_id,
            token: Uuid::new_v4(),
        };
        self.pending_load = Some(ticket);
        ticket
    }

    /// Complete an in-flight load
    ///
    /// Applies the snapshot (or blank defaults for `None`/empty payloads)
    /// only when the ticket is still current and its project is still the
    /// open one; superseded completions are ignored untouched.
    pub fn apply_snapshot(
        &mut self,
        ticket: LoadTicket,
        snapshot: Option<ScopeSnapshotDto>,
    ) -> LoadOutcome {
        if self.pending_load != Some(ticket) {
            tracing::debug!(project_id = ticket.project_id, "superseded load ignored");
            return LoadOutcome::Stale;
        }
        self.pending_load = None;

        let Some(active) = self.active.as_mut() else {
            return LoadOutcome::Stale;
        };
        if active.id != ticket.project_id {
            return LoadOutcome::Stale;
        }

        match snapshot {
            Some(snapshot) if !snapshot.is_empty() => snapshot.hydrate(&mut active.catalogs),
            _ => active.catalogs.reset_scope(),
        }
        LoadOutcome::Applied
    }

    /// Persist the open project's scope snapshot
    ///
    /// On failure the local catalogs stay last-known-good.
    ///
    /// # Errors
    /// Requires an open project; gateway failures propagate.
    pub async fn save_scope(&mut self) -> Result<(), SessionError> {
        let active = self.active.as_ref().ok_or(SessionError::NoActiveProject)?;
        let snapshot = ScopeSnapshotDto::capture(active.id, &active.catalogs, &self.config.editor);
        self.gateway.save_scope(snapshot).await?;
        tracing::info!(project_id = active.id, "saved scope snapshot");
        Ok(())
    }

    /// Save, then advance the step pointer and return the next route
    ///
    /// At the final step the pointer stays put; completion is always a
    /// separate explicit action.
    ///
    /// # Errors
    /// As [`AnalysisSession::save_scope`], plus lifecycle errors.
    pub async fn save_scope_and_continue(&mut self) -> Result<StepRoute, SessionError> {
        self.save_scope().await?;
        let active = self.active.as_mut().ok_or(SessionError::NoActiveProject)?;
        let step = active.lifecycle.current_step().unwrap_or(StepNumber::FIRST);
        match step.next() {
            Some(next) => Ok(active.lifecycle.advance_to(next)?),
            None => Ok(step.route()),
        }
    }

    /// Explicitly complete the open project and push the status
    ///
    /// # Errors
    /// Requires an open project in progress at step 7.
    pub async fn complete_active(&mut self) -> Result<(), SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoActiveProject)?;
        active.lifecycle.complete()?;
        let id = active.id;
        self.push_status(id, ProjectStatus::Completed).await
    }

    /// Cancel the open project and push the status
    ///
    /// # Errors
    /// Requires an open, active project.
    pub async fn cancel_active(&mut self) -> Result<(), SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoActiveProject)?;
        active.lifecycle.cancel()?;
        let id = active.id;
        self.push_status(id, ProjectStatus::Canceled).await
    }

    /// Remove the open project, push the status, and close it locally
    ///
    /// # Errors
    /// Requires an open project that is not already removed.
    pub async fn remove_active(&mut self) -> Result<(), SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoActiveProject)?;
        active.lifecycle.remove()?;
        let id = active.id;
        let result = self.push_status(id, ProjectStatus::Removed).await;
        self.close_project();
        result
    }

    /// Run the traceability audit over the open project
    ///
    /// # Errors
    /// Requires an open project.
    pub fn audit(&self) -> Result<Vec<TraceWarning>, SessionError> {
        Ok(resafe_trace::audit(self.catalogs()?))
    }

    /// Close the open project; any in-flight load becomes stale
    pub fn close_project(&mut self) {
        self.active = None;
        self.pending_load = None;
    }

    async fn push_status(&mut self, id: i64, status: ProjectStatus) -> Result<(), SessionError> {
        self.gateway
            .update_status(UpdateStatusRequest::new(id, status))
            .await?;
        if let Err(error) = self.refresh_projects().await {
            tracing::warn!(%error, "refresh after status push failed");
        }
        Ok(())
    }

    // ---- form-boundary record helpers -------------------------------------
    //
    // Link fields arrive as the human-editable delimited form ("A1, A2");
    // the codec decodes them here, at the boundary, and the records store
    // plain code lists.

    /// Add a hazard from form input
    ///
    /// # Errors
    /// All three fields are required; an invalid form mutates nothing.
    pub fn add_hazard(
        &mut self,
        code: &str,
        description: &str,
        linked_accidents: &str,
    ) -> Result<RecordId, SessionError> {
        let code = required("code", code)?;
        let description = required("description", description)?;
        let linked = required("linkedAccidents", linked_accidents)?;
        let linked_accidents = codes::split(&linked);

        let catalogs = self.catalogs_mut()?;
        Ok(catalogs.hazards.add(|id| Hazard {
            id,
            code,
            description,
            linked_accidents,
        }))
    }

    /// Add a safety constraint from form input
    ///
    /// # Errors
    /// All three fields are required; an invalid form mutates nothing.
    pub fn add_safety_constraint(
        &mut self,
        code: &str,
        statement: &str,
        linked_hazards: &str,
    ) -> Result<RecordId, SessionError> {
        let code = required("code", code)?;
        let statement = required("statement", statement)?;
        let linked = required("linkedHazards", linked_hazards)?;
        let linked_hazards = codes::split(&linked);

        let catalogs = self.catalogs_mut()?;
        Ok(catalogs.safety_constraints.add(|id| SafetyConstraint {
            id,
            code,
            statement,
            linked_hazards,
        }))
    }

    /// Add a responsibility from form input
    ///
    /// # Errors
    /// All three fields are required; an invalid form mutates nothing.
    pub fn add_responsibility(
        &mut self,
        component: &str,
        responsibility: &str,
        linked_constraints: &str,
    ) -> Result<RecordId, SessionError> {
        let component = required("component", component)?;
        let responsibility = required("responsibility", responsibility)?;
        let linked = required("linkedConstraints", linked_constraints)?;
        let linked_constraints = codes::split(&linked);

        let catalogs = self.catalogs_mut()?;
        Ok(catalogs.responsibilities.add(|id| Responsibility {
            id,
            component,
            responsibility,
            linked_constraints,
        }))
    }

    /// Add a controller constraint from form input
    ///
    /// # Errors
    /// UCA references, constraint text and mechanism are required.
    pub fn add_controller_constraint(
        &mut self,
        uca_refs: &str,
        constraint: &str,
        enforcement_mechanism: &str,
        status: ConstraintStatus,
    ) -> Result<RecordId, SessionError> {
        let refs = required("ucaRef", uca_refs)?;
        let constraint = required("constraint", constraint)?;
        let enforcement_mechanism = required("enforcementMechanism", enforcement_mechanism)?;
        let uca_refs = codes::split(&refs);

        let catalogs = self.catalogs_mut()?;
        Ok(catalogs.controller_constraints.add(|id| ControllerConstraint {
            id,
            uca_refs,
            constraint,
            enforcement_mechanism,
            status,
        }))
    }
}

fn required(field: &'static str, value: &str) -> Result<String, SessionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SessionError::validation(field, "is required"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use resafe_gateway::InMemoryGateway;

    async fn session_with_open_project() -> AnalysisSession<InMemoryGateway> {
        let mut session = AnalysisSession::new(Arc::new(InMemoryGateway::new()));
        session
            .create_project(ProjectDraft::named("Insulin Infusion Pump"))
            .await
            .unwrap();
        let id = session.projects()[0].id.unwrap();
        session.open_project(id).await.unwrap();
        session
    }

    #[tokio::test]
    async fn create_open_flow_lands_on_scope() {
        let mut session = AnalysisSession::new(Arc::new(InMemoryGateway::new()));
        session
            .create_project(ProjectDraft::named("Insulin Infusion Pump"))
            .await
            .unwrap();

        assert_eq!(session.projects().len(), 1);
        let id = session.projects()[0].id.unwrap();

        let route = session.open_project(id).await.unwrap();
        assert_eq!(route, StepRoute::Scope);
        assert_eq!(
            session.lifecycle().unwrap().status(),
            ProjectStatus::InProgress
        );
        assert!(session.catalogs().unwrap().hazards.is_empty());
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_gateway() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut session = AnalysisSession::new(Arc::clone(&gateway));

        let result = session.create_project(ProjectDraft::named("IIP")).await;
        assert!(matches!(result, Err(SessionError::Validation { .. })));
        assert!(gateway.list_open_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_and_reopen_roundtrips_scope() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut session = AnalysisSession::new(Arc::clone(&gateway));
        session
            .create_project(ProjectDraft::named("Insulin Infusion Pump"))
            .await
            .unwrap();
        let id = session.projects()[0].id.unwrap();
        session.open_project(id).await.unwrap();

        session.catalogs_mut().unwrap().accidents.add(|id| {
            resafe_record::Accident {
                id,
                code: "A1".into(),
                description: "Risk of death due to insulin mismanagement.".into(),
            }
        });
        session.add_hazard("H1", "Hypoglycemia.", "A1").unwrap();
        session.save_scope().await.unwrap();

        session.close_project();
        session.open_project(id).await.unwrap();

        let catalogs = session.catalogs().unwrap();
        assert_eq!(catalogs.accidents.len(), 1);
        assert_eq!(
            catalogs.hazards.find_by_code("H1").unwrap().linked_accidents,
            vec!["A1".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_scope_load_degrades_to_blank() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut session = AnalysisSession::new(Arc::clone(&gateway));
        session
            .create_project(ProjectDraft::named("Insulin Infusion Pump"))
            .await
            .unwrap();
        let id = session.projects()[0].id.unwrap();

        gateway.fail_next_call("backend unreachable");
        let route = session.open_project(id).await.unwrap();

        assert_eq!(route, StepRoute::Scope);
        assert!(session.catalogs().unwrap().accidents.is_empty());
    }

    #[tokio::test]
    async fn superseded_load_is_ignored() {
        let mut session = session_with_open_project().await;
        let id = session.active_project_id().unwrap();

        let stale = session.begin_load(id);
        let _current = session.begin_load(id);

        let snapshot = ScopeSnapshotDto {
            objectives: Some("late arrival".into()),
            ..Default::default()
        };
        assert_eq!(
            session.apply_snapshot(stale, Some(snapshot)),
            LoadOutcome::Stale
        );
        assert!(session.catalogs().unwrap().objectives_text.is_empty());
    }

    #[tokio::test]
    async fn load_after_close_is_ignored() {
        let mut session = session_with_open_project().await;
        let id = session.active_project_id().unwrap();

        let ticket = session.begin_load(id);
        session.close_project();

        assert_eq!(session.apply_snapshot(ticket, None), LoadOutcome::Stale);
    }

    #[tokio::test]
    async fn illegal_status_update_is_rejected_before_sending() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut session = AnalysisSession::new(Arc::clone(&gateway));
        session
            .create_project(ProjectDraft::named("Insulin Infusion Pump"))
            .await
            .unwrap();
        let id = session.projects()[0].id.unwrap();

        // Pending cannot jump straight to completed.
        let result = session.update_status(id, ProjectStatus::Completed).await;
        assert!(matches!(result, Err(SessionError::Transition(_))));
        assert_eq!(session.projects()[0].status, ProjectStatus::Pending);
    }

    #[tokio::test]
    async fn failed_save_keeps_local_state() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut session = AnalysisSession::new(Arc::clone(&gateway));
        session
            .create_project(ProjectDraft::named("Insulin Infusion Pump"))
            .await
            .unwrap();
        let id = session.projects()[0].id.unwrap();
        session.open_project(id).await.unwrap();
        session.add_hazard("H1", "Hypoglycemia.", "A1").unwrap();

        gateway.fail_next_call("write timeout");
        assert!(session.save_scope().await.is_err());

        // Local catalogs are last-known-good; nothing was rolled back.
        assert_eq!(session.catalogs().unwrap().hazards.len(), 1);
        assert_eq!(gateway.snapshot_count(), 0);
    }

    #[tokio::test]
    async fn add_hazard_validates_before_mutating() {
        let mut session = session_with_open_project().await;

        let result = session.add_hazard("", "desc", "A1");
        assert!(matches!(result, Err(SessionError::Validation { .. })));
        assert!(session.catalogs().unwrap().hazards.is_empty());

        session.add_hazard(" H1 ", "Hypoglycemia.", " A1 , A2 ").unwrap();
        let hazard = session.catalogs().unwrap().hazards.find_by_code("H1").unwrap();
        assert_eq!(hazard.linked_accidents, vec!["A1".to_string(), "A2".to_string()]);
    }

    #[tokio::test]
    async fn save_and_continue_advances_step() {
        let mut session = session_with_open_project().await;

        let route = session.save_scope_and_continue().await.unwrap();
        assert_eq!(route, StepRoute::IstarModels);
        assert_eq!(
            session.lifecycle().unwrap().current_step(),
            StepNumber::new(2)
        );
    }

    #[tokio::test]
    async fn complete_requires_final_step() {
        let mut session = session_with_open_project().await;
        assert!(matches!(
            session.complete_active().await,
            Err(SessionError::Transition(_))
        ));

        // Walk to step 7, then completion goes through.
        for _ in 0..6 {
            session.save_scope_and_continue().await.unwrap();
        }
        session.complete_active().await.unwrap();
        assert_eq!(
            session.projects()[0].status,
            ProjectStatus::Completed
        );
    }

    #[tokio::test]
    async fn remove_active_closes_project() {
        let mut session = session_with_open_project().await;
        session.remove_active().await.unwrap();

        assert!(session.active_project_id().is_none());
        // Removed projects vanish from the open list.
        assert!(session.projects().is_empty());
    }

    #[tokio::test]
    async fn audit_reports_dangling_reference() {
        let mut session = session_with_open_project().await;
        session.catalogs_mut().unwrap().accidents.add(|id| {
            resafe_record::Accident {
                id,
                code: "A1".into(),
                description: "Loss of life.".into(),
            }
        });
        session.add_hazard("H1", "Hypoglycemia.", "A1, A9").unwrap();

        let warnings = session.audit().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].missing, vec!["A9".to_string()]);
    }
}
