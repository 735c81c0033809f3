//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network access or randomness.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`StaticImages`] - Image source returning fixed references

pub mod http;
pub mod images;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use images::StaticImages;
