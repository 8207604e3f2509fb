//! ReSafety Traceability
//!
//! Read-only queries over the entity catalogs that keep the method's
//! cross-references honest.
//!
//! # Core Concepts
//!
//! - [`Resolution`]: the resolved/dangling split for one record's outbound
//!   reference list
//! - [`resolve`] / [`references_to`]: forward and inverse reference queries
//! - [`audit`]: the whole-project sweep over every fixed reference shape,
//!   producing non-fatal [`TraceWarning`]s
//!
//! Dangling references are reported, never repaired: the method requires
//! gaps to stay visible ("this hazard traces to no accident yet") rather
//! than silently disappear.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod audit;
mod resolver;

pub use audit::{audit, TraceLink, TraceWarning};
pub use resolver::{references_to, resolve, resolve_codes, Resolution};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
