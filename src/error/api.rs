//! Errors surfaced by the data client and the fetch pipeline.

use thiserror::Error;

use super::network::NetworkError;

/// Message shown to the user whenever a fetch cycle fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch posts. Please try again later.";

/// Error type for data client operations.
///
/// Both variants end the current fetch cycle; nothing is rendered from a
/// partially fetched aggregate.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport failure, timeout or non-2xx response.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The payload did not have the expected shape.
    #[error("Malformed {resource} response: {message}")]
    MalformedResponse { resource: String, message: String },
}

impl ApiError {
    pub fn malformed(resource: impl Into<String>, message: impl ToString) -> Self {
        ApiError::MalformedResponse {
            resource: resource.into(),
            message: message.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network(e) => e.error_code(),
            ApiError::MalformedResponse { .. } => "E_API_MALFORMED",
        }
    }

    /// The single message a view shows for any failed cycle.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Result type alias for data client operations.
pub type ApiResult<T> = Result<T, ApiError>;
