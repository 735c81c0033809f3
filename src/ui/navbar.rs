//! Navbar with the application title and the three routes.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_HEADER};
use crate::controller::ViewKind;

pub const APP_TITLE: &str = "Social Media Analytics";

pub fn render_navbar(frame: &mut Frame, area: Rect, current: ViewKind) {
    let titles = ViewKind::ALL
        .iter()
        .map(|view| Line::from(format!("{} {}", view.index() + 1, view.title())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", APP_TITLE),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(current.index())
        .style(Style::default().fg(COLOR_ACCENT))
        .highlight_style(
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" | ");

    frame.render_widget(tabs, area);
}
