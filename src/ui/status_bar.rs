//! Bottom status bar: route, last refresh time, key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACTIVE, COLOR_DIM};
use crate::app::App;

const KEY_HINTS: &str = "1-3/Tab switch  r refresh  j/k scroll  q quit";

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Paragraph::new(status_line(app)), area);
}

pub fn status_line(app: &App) -> Line<'static> {
    let controller = app.current();
    let updated = match controller.last_updated() {
        Some(at) => format!("updated {}", at.format("%H:%M:%S")),
        None => "not loaded".to_string(),
    };

    Line::from(vec![
        Span::styled(format!(" {} ", app.view.route()), Style::default().fg(COLOR_ACTIVE)),
        Span::styled(format!("· {} · {}", updated, KEY_HINTS), Style::default().fg(COLOR_DIM)),
    ])
}
