//! Gateway failure taxonomy

/// Failures crossing the persistence boundary
///
/// Nothing here is fatal to the core: loads degrade to defaults, saves
/// leave local state as last-known-good. Calls are not retried
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never completed (network, timeout, connection refused)
    #[error("transport failure: {0}")]
    Transport(#[from] anyhow::Error),

    /// The backend answered and refused
    #[error("backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The payload arrived but could not be decoded
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl GatewayError {
    /// Transport failure from a plain message
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(anyhow::anyhow!(message.into()))
    }

    /// Whether the request may have reached the backend at all
    #[inline]
    #[must_use]
    pub fn reached_backend(&self) -> bool {
        !matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_renders_message() {
        let err = GatewayError::transport("connection refused");
        assert_eq!(err.to_string(), "transport failure: connection refused");
        assert!(!err.reached_backend());
    }

    #[test]
    fn rejected_carries_status() {
        let err = GatewayError::Rejected {
            status: 404,
            message: "no such project".into(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.reached_backend());
    }
}
