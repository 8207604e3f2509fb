//! Step 7 records - model synchronization
//!
//! The closing step feeds analysis results back into the goal models:
//! change records against the models, validation tasks tracking the
//! sign-off work, and integration notes from alignment sessions.

use crate::record::{CatalogRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Deployment status of a model change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateStatus {
    #[default]
    Planned,
    InProgress,
    Deployed,
}

/// Progress of a validation task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

/// A change to apply to the goal models, with its driver and evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelChange {
    pub id: RecordId,
    pub area: String,
    pub change: String,
    /// What prompted the change ("UCA-12 mitigation", "Scenario LS-33")
    pub driver: String,
    pub impact: String,
    pub status: UpdateStatus,
    pub evidence: Vec<String>,
}

impl CatalogRecord for ModelChange {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A task validating that a model change landed correctly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationTask {
    pub id: RecordId,
    pub name: String,
    pub owner: String,
    pub due_date: String,
    pub channel: String,
    pub status: TaskStatus,
}

impl CatalogRecord for ValidationTask {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A note from an alignment session, with its follow-up actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationNote {
    pub id: RecordId,
    pub summary: String,
    pub created_on: String,
    pub author: String,
    pub action_items: Vec<String>,
}

impl CatalogRecord for IntegrationNote {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_status_serializes_kebab_case() {
        let json = serde_json::to_string(&UpdateStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn task_status_defaults_to_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }
}
