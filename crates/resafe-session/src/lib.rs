//! ReSafety Analysis Session
//!
//! The orchestrator that ties the workbench together: one
//! [`AnalysisSession`] per analyst, owning the project list, the open
//! project's catalogs and lifecycle, and the gateway handle.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use resafe_gateway::InMemoryGateway;
//! use resafe_session::{AnalysisSession, ProjectDraft};
//!
//! # async fn example() -> Result<(), resafe_session::SessionError> {
//! let gateway = Arc::new(InMemoryGateway::new());
//! let mut session = AnalysisSession::new(gateway);
//!
//! session
//!     .create_project(ProjectDraft::named("Insulin Infusion Pump"))
//!     .await?;
//! let project_id = session.projects()[0].id.unwrap();
//! session.open_project(project_id).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod draft;
mod error;
mod session;

pub use draft::ProjectDraft;
pub use error::SessionError;
pub use session::{AnalysisSession, LoadOutcome, LoadTicket, SessionConfig};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
