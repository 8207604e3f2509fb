//! ReSafety Guidance
//!
//! The statically-defined knowledge tree that walks an analyst through the
//! seven-step method, and the navigator that drills into it.
//!
//! # Core Concepts
//!
//! - [`GuidanceTopic`]: one node of explanatory content (title,
//!   description, ordered labeled sub-items)
//! - [`content`]: the hand-authored topic map, keyed by title; process-wide
//!   immutable static data
//! - [`GuidanceNavigator`]: open/drill-into/back over an explicit LIFO back
//!   stack
//! - [`resolve_drill_key`]: the label→key heuristic (decorative-suffix
//!   stripping with a colon-split fallback)

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod content;
mod navigator;
mod topic;

pub use navigator::{resolve_drill_key, GuidanceNavigator};
pub use topic::GuidanceTopic;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
