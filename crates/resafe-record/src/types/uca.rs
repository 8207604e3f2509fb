//! Step 4 records - unsafe control actions

use crate::record::{CatalogRecord, CodedRecord, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The four ways a control action becomes unsafe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UcaCategory {
    #[default]
    #[serde(rename = "Not provided")]
    NotProvided,
    #[serde(rename = "Provided incorrectly")]
    ProvidedIncorrectly,
    #[serde(rename = "Incorrect timing")]
    IncorrectTiming,
    #[serde(rename = "Stopped too soon / applied too long")]
    WrongDuration,
}

impl UcaCategory {
    /// Normalize a free-form category string, defaulting to `NotProvided`
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Provided incorrectly" => Self::ProvidedIncorrectly,
            "Incorrect timing" => Self::IncorrectTiming,
            "Stopped too soon / applied too long" => Self::WrongDuration,
            _ => Self::NotProvided,
        }
    }
}

impl Display for UcaCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotProvided => "Not provided",
            Self::ProvidedIncorrectly => "Provided incorrectly",
            Self::IncorrectTiming => "Incorrect timing",
            Self::WrongDuration => "Stopped too soon / applied too long",
        };
        f.write_str(label)
    }
}

/// An unsafe control action in a specific hazard context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsafeControlAction {
    pub id: RecordId,
    /// Human-facing code, `UCA-01` by convention; controller constraints
    /// reference UCAs through it
    pub code: Option<String>,
    pub controller: String,
    pub control_action: String,
    /// Hazard context, free text ("H-2 · Control application releases
    /// insulin when glucose level is high")
    pub hazard: String,
    pub category: UcaCategory,
}

impl CatalogRecord for UnsafeControlAction {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl CodedRecord for UnsafeControlAction {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}
