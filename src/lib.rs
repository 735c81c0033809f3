//! Feedboard - a terminal dashboard for social media analytics
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod aggregate;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod traits;
pub mod ui;
