//! Body of the current view: heading, error line, loading indicator, cards.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::cards::{post_card, user_card};
use super::helpers::spinner;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_HEADER};
use crate::app::App;
use crate::controller::{ViewController, ViewKind, ViewState};
use crate::pipeline::ViewData;

pub fn render_view(frame: &mut Frame, area: Rect, app: &App) {
    let lines = view_lines(app.current(), app.scroll_offset, app.tick_count, area);
    frame.render_widget(Paragraph::new(lines), area);
}

/// Build the visible lines for `controller`, skipping the first
/// `scroll_offset` cards.
pub fn view_lines(
    controller: &ViewController,
    scroll_offset: usize,
    tick: u64,
    area: Rect,
) -> Vec<Line<'static>> {
    let view = controller.kind();
    let width = area.width as usize;
    let height = area.height as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            view.title(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    if let Some(message) = controller.error_message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(COLOR_ERROR),
        )));
        lines.push(Line::default());
    }

    let data = match (view.keeps_stale_on_error(), controller.state()) {
        // Stale data stays on screen for views that keep it
        (true, _) => controller.data(),
        (false, ViewState::Ready(data)) => Some(data),
        (false, _) => None,
    };

    match data {
        None if controller.error_message().is_none() => {
            lines.push(loading_line(tick));
        }
        None => {}
        Some(data) if data.is_empty() => {
            lines.push(Line::from(Span::styled(
                empty_message(view),
                Style::default().fg(COLOR_DIM),
            )));
        }
        Some(data) => {
            for card in cards(data, width).into_iter().skip(scroll_offset) {
                if lines.len() >= height {
                    break;
                }
                lines.extend(card);
            }
        }
    }

    lines.truncate(height.max(1));
    lines
}

fn cards(data: &ViewData, width: usize) -> Vec<Vec<Line<'static>>> {
    match data {
        ViewData::TopUsers(users) => users
            .iter()
            .enumerate()
            .map(|(i, row)| user_card(i + 1, row, width))
            .collect(),
        ViewData::Posts(posts) => posts.iter().map(|post| post_card(post, width)).collect(),
    }
}

fn loading_line(tick: u64) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} Loading...", spinner(tick)),
        Style::default().fg(COLOR_DIM),
    ))
}

fn empty_message(view: ViewKind) -> &'static str {
    match view {
        ViewKind::TopUsers => "No users to show.",
        ViewKind::Trending | ViewKind::Feed => "No posts to show.",
    }
}
