//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`PlaceholderImages`] - picsum/pravatar image references
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::StaticImages`] - Fixed image references

pub mod images;
pub mod mock;
pub mod reqwest_http;

pub use images::PlaceholderImages;
pub use mock::{MockHttpClient, StaticImages};
pub use reqwest_http::ReqwestHttpClient;
