//! Error handling for Feedboard.
//!
//! - **Network errors**: connection, timeout and non-2xx failures
//! - **API errors**: `ApiError` wraps network errors and malformed payloads
//! - **Result type alias**: `ApiResult<T>` for data client operations
//!
//! | Kind | Cause | Effect |
//! |------|-------|--------|
//! | Network | transport, timeout, non-2xx | cycle fails |
//! | MalformedResponse | payload shape mismatch | cycle fails |

mod api;
mod network;

pub use api::{ApiError, ApiResult, FETCH_FAILED_MESSAGE};
pub use network::{classify_http_error, NetworkError};
