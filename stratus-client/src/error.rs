//! Error types for the Stratus client

use std::fmt;

use stratus_core::dto::response::ApiError;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Stratus client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The API reported one or more application-level errors
    #[error("API error: {0}")]
    Api(ErrorResponse),

    /// The API returned a failure status without a decodable error envelope
    #[error("unexpected response (status {status}): {body}")]
    UnexpectedResponse {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Failed to parse a response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The polling interval must be non-zero
    #[error("polling interval must be greater than zero")]
    InvalidInterval,

    /// The poll was aborted through its cancellation token
    #[error("poll cancelled")]
    Cancelled,
}

/// Application error entries reported by the API, together with the HTTP
/// status they arrived under.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// HTTP status code of the response carrying the errors
    pub status: u16,
    /// Error entries, in server order
    pub errors: Vec<ApiError>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.status)?;
        for error in &self.errors {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

impl ClientError {
    /// HTTP status carried by the error, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api(ErrorResponse { status, .. })
            | Self::UnexpectedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.http_status() == Some(404)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.http_status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.http_status(), Some(status) if status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::Api(ErrorResponse {
            status,
            errors: vec![ApiError {
                code: 9001,
                message: "task does not exist".to_string(),
                context: Default::default(),
            }],
        })
    }

    #[test]
    fn status_helpers() {
        assert!(api_error(404).is_not_found());
        assert!(api_error(422).is_client_error());
        assert!(api_error(503).is_server_error());
        assert!(!ClientError::Cancelled.is_client_error());
    }

    #[test]
    fn error_response_lists_entries() {
        let err = api_error(422);
        assert_eq!(
            err.to_string(),
            "API error: status 422; [9001] task does not exist"
        );
    }
}
