//! Error types for the search adapter.

use thiserror::Error;

/// Result type alias using `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures surfaced by the search adapter.
///
/// All variants are owned strings/numbers so outcomes can be stored in
/// reactive state and compared in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("search endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("malformed response payload: {0}")]
    Decode(String),

    /// No bearer token was configured at build time.
    #[error("no API token configured; rebuild with CINEGRID_TMDB_TOKEN set")]
    MissingToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.to_string().contains("network error"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_missing_token_display() {
        let err = ApiError::MissingToken;
        assert!(err.to_string().contains("CINEGRID_TMDB_TOKEN"));
    }
}
