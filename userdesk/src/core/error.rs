//! # Common Error Types
//!
//! Consolidated error handling for the desktop client.
//!
//! Every remote operation returns [`ApiError`]. Callers collapse the variants
//! into a single generic notification per action; the one variant handled
//! specially is [`ApiError::Unauthorized`], which clears the session and
//! returns the user to the login screen.

use thiserror::Error;

/// Error taxonomy for remote API operations.
///
/// - **Network**: transport failures (connection refused, timeout, DNS)
/// - **Parse**: the response body did not match the expected shape
/// - **Unauthorized**: the service rejected the credential (401-class)
/// - **NotFound**: the requested resource does not exist (404)
/// - **Remote**: any other non-success status, with the service's error
///   message when the body carried one
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("not authorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("request rejected ({status}): {message}")]
    Remote { status: u16, message: String },
}

impl ApiError {
    /// Whether this failure should invalidate the local session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Convenience alias used throughout the client
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ApiError::Remote {
            status: 400,
            message: "Missing password".to_string(),
        };
        assert_eq!(err.to_string(), "request rejected (400): Missing password");
        assert_eq!(ApiError::Unauthorized.to_string(), "not authorized");
    }

    #[test]
    fn only_unauthorized_clears_session() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::NotFound.is_unauthorized());
        assert!(!ApiError::Network("refused".to_string()).is_unauthorized());
    }
}
