//! Navigation and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::controller::ViewKind;

impl App {
    /// Switch to `view`: the current view is unmounted (timer cancelled,
    /// in-flight cycles aborted) and `view` is mounted fresh.
    pub fn navigate_to(&mut self, view: ViewKind) {
        if view == self.view {
            return;
        }
        self.unmount(self.view);
        self.view = view;
        self.scroll_offset = 0;
        self.mount(view);
    }

    pub fn next_view(&mut self) {
        self.navigate_to(self.view.next());
    }

    pub fn previous_view(&mut self) {
        self.navigate_to(self.view.previous());
    }

    /// Remount the current view, which starts a new fetch cycle.
    pub fn refresh(&mut self) {
        self.unmount(self.view);
        self.mount(self.view);
    }

    /// Rows of data currently displayed.
    pub fn row_count(&self) -> usize {
        self.current().data().map(|data| data.len()).unwrap_or(0)
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(rows);
        self.clamp_scroll();
        self.mark_dirty();
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
        self.mark_dirty();
    }

    pub(super) fn clamp_scroll(&mut self) {
        let max = self.row_count().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('1') => self.navigate_to(ViewKind::TopUsers),
            KeyCode::Char('2') => self.navigate_to(ViewKind::Trending),
            KeyCode::Char('3') => self.navigate_to(ViewKind::Feed),
            KeyCode::Tab | KeyCode::Right => self.next_view(),
            KeyCode::BackTab | KeyCode::Left => self.previous_view(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(5),
            KeyCode::PageUp => self.scroll_up(5),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_up(usize::MAX),
            _ => {}
        }
    }
}
