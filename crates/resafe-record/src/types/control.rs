//! Step 3 records - control structure (control actions and feedback loops)

use crate::record::{CatalogRecord, RecordId};
use serde::{Deserialize, Serialize};

/// A control action a controller issues to a controlled process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlAction {
    pub id: RecordId,
    pub controller: String,
    pub action: String,
    pub controlled_process: String,
    /// Feedback channel the controller relies on for this action
    pub feedback: String,
}

impl CatalogRecord for ControlAction {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A feedback loop between two elements of the control structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackLoop {
    pub id: RecordId,
    pub source: String,
    pub destination: String,
    pub signal: String,
    /// Expected latency bound, free text ("< 250 ms", "Realtime")
    pub latency: String,
}

impl CatalogRecord for FeedbackLoop {
    fn id(&self) -> RecordId {
        self.id
    }
}
