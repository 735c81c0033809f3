//! Network-related error types.
//!
//! This module defines errors that occur while talking to the remote API:
//! connection failures, timeouts and non-2xx responses.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String, message: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { url: String, status: u16, message: String },

    /// Generic transport error.
    Other { url: String, message: String },
}

impl NetworkError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            NetworkError::ConnectionFailed { url, .. }
            | NetworkError::Timeout { url, .. }
            | NetworkError::HttpStatus { url, .. }
            | NetworkError::Other { url, .. } => url,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url, message } => {
                write!(f, "Request to '{}' timed out: {}", url, message)
            }
            NetworkError::HttpStatus { url, status, message } => {
                write!(f, "HTTP {} from '{}': {}", status, url, message)
            }
            NetworkError::Other { url, message } => {
                write!(f, "Network error for '{}': {}", url, message)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport error into a NetworkError.
pub fn classify_http_error(err: HttpError, url: &str) -> NetworkError {
    let url = url.to_string();
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed { url, message },
        HttpError::Timeout(message) => NetworkError::Timeout { url, message },
        HttpError::InvalidUrl(message) | HttpError::Other(message) => {
            NetworkError::Other { url, message }
        }
    }
}
