//! ReSafety Persistence Gateway
//!
//! The contracts the core consumes from the backend persistence service.
//! Transport is out of scope; this crate fixes the request/response shapes,
//! their defaulting rules, and the async trait the session drives.
//!
//! # Core Concepts
//!
//! - [`ProjectSummaryDto`] / [`ScopeSnapshotDto`]: tolerant wire shapes;
//!   unexpected or missing optional fields default rather than reject
//! - [`PersistenceGateway`]: the async collaborator trait
//! - [`GatewayError`]: transport and rejection failures, caught at the
//!   boundary and degraded, never fatal
//! - [`InMemoryGateway`]: reference implementation backed by serialized
//!   snapshots, used by tests and demos

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod dto;
mod error;
mod memory;
mod store;

pub use dto::{
    AccidentDto, ArtefactDto, CreateProjectRequest, GeneralSummaryDto, HazardDto,
    ProjectSummaryDto, ResourceDto, ResponsibilityDto, SafetyConstraintDto, ScopeSnapshotDto,
    SystemComponentDto, UpdateStatusRequest,
};
pub use error::GatewayError;
pub use memory::InMemoryGateway;
pub use store::PersistenceGateway;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
