//! Project status vocabulary and wire normalization

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Lifecycle status of a project
///
/// The persisted vocabulary is wider and messier than this enum: historical
/// snapshots carry `"complete"`, `"cancelled"`, `"reopened"`, arbitrary
/// casing, and occasionally junk. [`ProjectStatus::from_raw`] folds all of
/// that into the five canonical states; external data is untrusted but
/// never blocks loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Created but not started; step pointer is forced to 1
    #[default]
    Pending,
    /// Workflow underway at some step in `[1,7]`
    InProgress,
    /// Explicitly finished from step 7
    Completed,
    /// Explicitly abandoned; step pointer is irrelevant
    Canceled,
    /// Hidden from active lists; terminal
    Removed,
}

impl ProjectStatus {
    /// Normalize a wire status string into the canonical vocabulary
    ///
    /// `"reopened"` maps to `InProgress` (a reopened project resumes where
    /// it was); any unrecognized string maps to `Pending`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in-progress" | "in_progress" | "reopened" => Self::InProgress,
            "complete" | "completed" => Self::Completed,
            "canceled" | "cancelled" => Self::Canceled,
            "removed" => Self::Removed,
            _ => Self::Pending,
        }
    }

    /// Canonical wire spelling
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
            Self::Removed => "removed",
        }
    }

    /// Whether the project still appears in active lists
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }

    /// Whether any further transition exists from this status
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Removed)
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_is_case_insensitive() {
        assert_eq!(ProjectStatus::from_raw("REOPENED"), ProjectStatus::InProgress);
        assert_eq!(ProjectStatus::from_raw("  Pending "), ProjectStatus::Pending);
    }

    #[test]
    fn from_raw_accepts_legacy_spellings() {
        assert_eq!(ProjectStatus::from_raw("complete"), ProjectStatus::Completed);
        assert_eq!(ProjectStatus::from_raw("cancelled"), ProjectStatus::Canceled);
        assert_eq!(ProjectStatus::from_raw("in_progress"), ProjectStatus::InProgress);
    }

    #[test]
    fn from_raw_defaults_unknown_to_pending() {
        assert_eq!(ProjectStatus::from_raw("archived"), ProjectStatus::Pending);
        assert_eq!(ProjectStatus::from_raw(""), ProjectStatus::Pending);
    }

    #[test]
    fn as_str_roundtrips_canonical_states() {
        for status in [
            ProjectStatus::Pending,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
            ProjectStatus::Canceled,
            ProjectStatus::Removed,
        ] {
            assert_eq!(ProjectStatus::from_raw(status.as_str()), status);
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
