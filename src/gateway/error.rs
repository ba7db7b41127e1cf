//! Gateway error definitions.

use thiserror::Error;

/// Errors that can occur talking to upstream collaborators.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Required credentials absent. Expected in demo deployments; callers
    /// downgrade to sample data or local generation.
    #[error("upstream not configured")]
    Unconfigured,

    /// Upstream returned a non-success status.
    #[error("upstream returned status {status}: {detail}")]
    Upstream { status: u16, detail: String },

    /// Network-level failure (connect, timeout, malformed body).
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::Upstream {
            status: 503,
            detail: "service unavailable".into(),
        };
        assert!(err.to_string().contains("503"));

        assert_eq!(
            GatewayError::Unconfigured.to_string(),
            "upstream not configured"
        );
    }
}
