//! View controllers.
//!
//! Each view (top users, trending posts, feed) owns a [`ViewController`]
//! holding its loading/result/error state. A controller is mounted while its
//! view is shown; mounting starts a [`RefreshSchedule`] that requests a
//! fetch immediately and, for the feed, on every refresh interval.
//! Completed fetches come back as messages carrying the [`RequestToken`]
//! issued when they started, and only the latest token is accepted.

mod runner;
mod schedule;
mod state;

pub use runner::spawn_fetch;
pub use schedule::RefreshSchedule;
pub use state::{RequestToken, ViewController, ViewState};

use std::fmt;
use std::time::Duration;

/// The three dashboard views, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    #[default]
    TopUsers,
    Trending,
    Feed,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::TopUsers, ViewKind::Trending, ViewKind::Feed];

    /// Heading shown above the view.
    pub fn title(self) -> &'static str {
        match self {
            ViewKind::TopUsers => "Top Users",
            ViewKind::Trending => "Trending Posts",
            ViewKind::Feed => "Feed",
        }
    }

    /// Route name, as used on the command line.
    pub fn route(self) -> &'static str {
        match self {
            ViewKind::TopUsers => "top-users",
            ViewKind::Trending => "trending",
            ViewKind::Feed => "feed",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.route() == route)
    }

    pub fn index(self) -> usize {
        match self {
            ViewKind::TopUsers => 0,
            ViewKind::Trending => 1,
            ViewKind::Feed => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the last good result stays visible after a failed cycle.
    pub fn keeps_stale_on_error(self) -> bool {
        matches!(self, ViewKind::Feed)
    }

    /// Polling interval while mounted; `None` means fetch once on mount.
    pub fn refresh_interval(self, feed_interval: Duration) -> Option<Duration> {
        match self {
            ViewKind::Feed => Some(feed_interval),
            ViewKind::TopUsers | ViewKind::Trending => None,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}
