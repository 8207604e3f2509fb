//! ReSafety Entity Catalog
//!
//! Ordered, id-keyed record collections for the currently open project.
//!
//! # Core Concepts
//!
//! - [`Catalog<T>`]: one ordered collection per record type; newest records
//!   first, tolerant id-keyed mutation, atomic bulk replace
//! - [`CodeSequencer`]: allocates the next catalog-local id, re-derived on
//!   every bulk replace so reloads never collide
//! - [`ProjectCatalogs`]: the per-project bundle owning every collection
//!   plus the free-text scope summary
//!
//! One `ProjectCatalogs` instance exists per open project and is passed by
//! reference to whoever needs it; nothing here is process-global.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod catalog;
mod project_set;
mod sequencer;

pub use catalog::Catalog;
pub use project_set::ProjectCatalogs;
pub use sequencer::CodeSequencer;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
