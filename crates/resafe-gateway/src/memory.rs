//! In-memory gateway implementation
//!
//! Backs tests and demos. Snapshots are stored as serialized JSON values so
//! every load and save passes through the real wire shapes, catching serde
//! regressions the way a live backend would.

use crate::dto::{
    CreateProjectRequest, ProjectSummaryDto, ScopeSnapshotDto, UpdateStatusRequest,
};
use crate::error::GatewayError;
use crate::store::PersistenceGateway;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    projects: Vec<ProjectSummaryDto>,
    scopes: HashMap<i64, serde_json::Value>,
    fail_next: Option<String>,
}

/// A gateway that lives entirely in process memory
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    state: Mutex<State>,
}

impl InMemoryGateway {
    /// Empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with project summaries
    #[must_use]
    pub fn with_projects(projects: Vec<ProjectSummaryDto>) -> Self {
        let next_id = projects
            .iter()
            .filter_map(|p| p.id)
            .max()
            .unwrap_or_default();
        Self {
            state: Mutex::new(State {
                next_id,
                projects,
                scopes: HashMap::new(),
                fail_next: None,
            }),
        }
    }

    /// Make the next call fail with a transport error (failure injection)
    pub fn fail_next_call(&self, reason: impl Into<String>) {
        self.lock().fail_next = Some(reason.into());
    }

    /// Number of stored snapshots
    #[must_use]
    pub fn snapshot_count(&self) -> usize {
        self.lock().scopes.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn take_injected_failure(&self) -> Result<(), GatewayError> {
        match self.lock().fail_next.take() {
            Some(reason) => Err(GatewayError::transport(reason)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn list_open_projects(&self) -> Result<Vec<ProjectSummaryDto>, GatewayError> {
        self.take_injected_failure()?;
        let state = self.lock();
        Ok(state
            .projects
            .iter()
            .filter(|p| p.status.as_deref() != Some("removed"))
            .cloned()
            .collect())
    }

    async fn create_minimal(
        &self,
        request: CreateProjectRequest,
    ) -> Result<ProjectSummaryDto, GatewayError> {
        self.take_injected_failure()?;
        let mut state = self.lock();
        state.next_id += 1;
        let summary = ProjectSummaryDto {
            id: Some(state.next_id),
            name: Some(request.name),
            domain: request.domain,
            owner: request.owner,
            description: request.description,
            status: Some("pending".into()),
            current_step: Some(request.current_step),
            created_at: None,
            updated_at: None,
        };
        state.projects.push(summary.clone());
        tracing::debug!(id = state.next_id, "created in-memory project");
        Ok(summary)
    }

    async fn update_status(
        &self,
        request: UpdateStatusRequest,
    ) -> Result<ProjectSummaryDto, GatewayError> {
        self.take_injected_failure()?;
        let mut state = self.lock();
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == Some(request.id))
            .ok_or(GatewayError::Rejected {
                status: 404,
                message: format!("no project with id {}", request.id),
            })?;
        project.status = Some(request.status);
        Ok(project.clone())
    }

    async fn load_scope(&self, project_id: i64) -> Result<Option<ScopeSnapshotDto>, GatewayError> {
        self.take_injected_failure()?;
        let state = self.lock();
        state
            .scopes
            .get(&project_id)
            .map(|value| serde_json::from_value(value.clone()).map_err(GatewayError::from))
            .transpose()
    }

    async fn save_scope(&self, snapshot: ScopeSnapshotDto) -> Result<(), GatewayError> {
        self.take_injected_failure()?;
        let project_id = snapshot.id.ok_or(GatewayError::Rejected {
            status: 400,
            message: "snapshot is missing a project id".into(),
        })?;
        let value = serde_json::to_value(&snapshot)?;
        self.lock().scopes.insert(project_id, value);
        Ok(())
    }
}
