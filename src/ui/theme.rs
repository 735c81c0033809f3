//! Color theme constants for the dashboard
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Selected navbar route
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info (image references, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Numeric stats (post and comment counts)
pub const COLOR_STAT: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Error messages
pub const COLOR_ERROR: Color = Color::Red;
