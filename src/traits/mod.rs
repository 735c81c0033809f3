//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations against the remote API
//! - [`ImageSource`] - Decorative image references attached to view rows

pub mod http;
pub mod images;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use images::ImageSource;
