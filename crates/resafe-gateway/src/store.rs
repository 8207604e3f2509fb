//! The persistence collaborator trait

use crate::dto::{
    CreateProjectRequest, ProjectSummaryDto, ScopeSnapshotDto, UpdateStatusRequest,
};
use crate::error::GatewayError;
use async_trait::async_trait;

/// The backend persistence service, seen from the core
///
/// Implementations wrap whatever transport exists; the core only relies on
/// these five operations and their error semantics. Calls are single-shot:
/// the core never retries automatically, and a failed call must leave the
/// backend-visible state unambiguous enough to reload.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Ordered list of open projects (minimal summaries)
    async fn list_open_projects(&self) -> Result<Vec<ProjectSummaryDto>, GatewayError>;

    /// Create a minimal project record
    ///
    /// The response may lack an `id`; callers must tolerate that.
    async fn create_minimal(
        &self,
        request: CreateProjectRequest,
    ) -> Result<ProjectSummaryDto, GatewayError>;

    /// Update a project's status; callers reload the list afterwards rather
    /// than merging the response in place
    async fn update_status(
        &self,
        request: UpdateStatusRequest,
    ) -> Result<ProjectSummaryDto, GatewayError>;

    /// Load the step-1 scope snapshot for a project
    ///
    /// `Ok(None)` means the project has no snapshot yet: start from
    /// defaults, not an error.
    async fn load_scope(&self, project_id: i64) -> Result<Option<ScopeSnapshotDto>, GatewayError>;

    /// Persist the step-1 scope snapshot
    async fn save_scope(&self, snapshot: ScopeSnapshotDto) -> Result<(), GatewayError>;
}
