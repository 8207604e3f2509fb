//! Concrete record types, grouped by the workflow step that produces them

pub mod constraint;
pub mod control;
pub mod goal_model;
pub mod model_sync;
pub mod scenario;
pub mod scope;
pub mod uca;
