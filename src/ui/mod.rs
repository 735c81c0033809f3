//! UI rendering for the dashboard
//!
//! ```text
//! ┌ Social Media Analytics ──────────────────┐
//! │ 1 Top Users | 2 Trending Posts | 3 Feed  │
//! └──────────────────────────────────────────┘
//!  <view heading, error line, cards>
//!  <status bar>
//! ```

mod cards;
mod helpers;
mod navbar;
mod status_bar;
mod theme;
mod views;

pub use cards::{post_card, user_card};
pub use helpers::truncate_to_width;
pub use navbar::APP_TITLE;
pub use views::view_lines;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use navbar::render_navbar;
use status_bar::render_status_bar;
use views::render_view;

/// Render the whole screen for the current view
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(1),    // View body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_navbar(frame, chunks[0], app.view);

    let body = chunks[1].inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 0,
    });
    render_view(frame, body, app);
    render_status_bar(frame, chunks[2], app);
}
