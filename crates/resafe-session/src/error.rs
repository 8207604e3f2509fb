//! Aggregated session error type

use resafe_gateway::GatewayError;
use resafe_workflow::TransitionError;

/// Everything that can go wrong at the session level
///
/// Validation failures never mutate a catalog; gateway failures degrade to
/// a safe state; transition failures leave the lifecycle untouched. None of
/// these are fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A form field failed boundary validation
    #[error("validation failed for {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// The persistence gateway failed
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// An illegal lifecycle transition was requested
    #[error("lifecycle error: {0}")]
    Transition(#[from] TransitionError),

    /// An operation needed an open project and none is
    #[error("no project is open")]
    NoActiveProject,

    /// The requested project is not in the loaded list
    #[error("unknown project id {0}")]
    UnknownProject(i64),
}

impl SessionError {
    /// Shorthand for a validation failure
    #[must_use]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this is a validation failure (surfaced on the form, no
    /// state change)
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
