//! Fetch error types
//!
//! Every way a resource fetch can fail. Views collapse all of them into a
//! single error state carrying the display message.

use thiserror::Error;

/// Errors that can occur while fetching a resource collection
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// Connection refused, DNS failure, TLS error, timeout
    #[error("Network error: {0}")]
    Transport(String),

    /// The body was not valid JSON
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The owning view went away before the response arrived
    #[error("Request cancelled")]
    Cancelled,

    /// The configured base URL could not be turned into a request URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// HTTP status, when the failure came from the server
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if err.is_builder() {
            FetchError::InvalidUrl(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.status(), Some(500));

        assert_eq!(FetchError::Cancelled.to_string(), "Request cancelled");
        assert!(FetchError::Cancelled.is_cancelled());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(!err.to_string().is_empty());
    }
}
