//! Per-view state machine.
//!
//! ```text
//! Idle ──mount──▶ Loading ──ok──▶ Ready(data)
//!                    ▲     └─err─▶ Failed(message)
//!                    └──── next tick (feed) / remount
//! ```

use chrono::{DateTime, Local};
use tracing::{debug, error, info, warn};

use super::ViewKind;
use crate::error::{ApiError, ApiResult};
use crate::pipeline::ViewData;

/// Identifies one fetch cycle. Issued in strictly increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What a view currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    /// A cycle is running; `previous` is the stale data still on screen.
    Loading { previous: Option<ViewData> },
    Ready(ViewData),
    /// The latest cycle failed; `previous` is the stale data still on screen.
    Failed {
        message: String,
        previous: Option<ViewData>,
    },
}

/// Loading/result/error state of one view.
#[derive(Debug)]
pub struct ViewController {
    kind: ViewKind,
    state: ViewState,
    mounted: bool,
    generation: u64,
    latest_token: u64,
    last_updated: Option<DateTime<Local>>,
}

impl ViewController {
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            state: ViewState::Idle,
            mounted: false,
            generation: 0,
            latest_token: 0,
            last_updated: None,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mount counter; refresh requests from an older mount are ignored.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time of the last accepted successful cycle.
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    /// Data to display: the current result, or stale data kept underneath a
    /// loading indicator or error.
    pub fn data(&self) -> Option<&ViewData> {
        match &self.state {
            ViewState::Ready(data) => Some(data),
            ViewState::Loading { previous } | ViewState::Failed { previous, .. } => {
                previous.as_ref()
            }
            ViewState::Idle => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Start a fresh mount. State resets to `Idle`; tokens keep counting so
    /// completions from an earlier mount can never be accepted.
    pub fn mount(&mut self) -> u64 {
        self.mounted = true;
        self.generation += 1;
        self.state = ViewState::Idle;
        debug!("Mounted {} view (generation {})", self.kind, self.generation);
        self.generation
    }

    /// Stop accepting transitions until the next mount.
    pub fn unmount(&mut self) {
        if self.mounted {
            debug!("Unmounted {} view", self.kind);
        }
        self.mounted = false;
    }

    /// Enter `Loading` and issue the token for the new cycle.
    ///
    /// Returns `None` while unmounted.
    pub fn begin(&mut self) -> Option<RequestToken> {
        if !self.mounted {
            return None;
        }
        self.latest_token += 1;
        let previous = self.take_previous();
        self.state = ViewState::Loading { previous };
        Some(RequestToken(self.latest_token))
    }

    /// Apply the outcome of the cycle identified by `token`.
    ///
    /// Returns `false` when the completion was discarded: the view is
    /// unmounted or a newer cycle has been issued since.
    pub fn complete(&mut self, token: RequestToken, result: ApiResult<ViewData>) -> bool {
        if !self.mounted {
            debug!("Dropping {} completion {:?}: view unmounted", self.kind, token);
            return false;
        }
        if token.0 != self.latest_token {
            warn!(
                "Dropping stale {} completion {:?} (latest is {})",
                self.kind, token, self.latest_token
            );
            return false;
        }

        match result {
            Ok(data) => {
                info!("{} view ready with {} rows", self.kind, data.len());
                self.state = ViewState::Ready(data);
                self.last_updated = Some(Local::now());
            }
            Err(err) => {
                self.log_failure(&err);
                let previous = self.take_previous();
                self.state = ViewState::Failed {
                    message: err.user_message().to_string(),
                    previous,
                };
            }
        }
        true
    }

    fn take_previous(&mut self) -> Option<ViewData> {
        if !self.kind.keeps_stale_on_error() {
            return None;
        }
        match std::mem::take(&mut self.state) {
            ViewState::Ready(data) => Some(data),
            ViewState::Loading { previous } | ViewState::Failed { previous, .. } => previous,
            ViewState::Idle => None,
        }
    }

    fn log_failure(&self, err: &ApiError) {
        error!("Error fetching {} data [{}]: {}", self.kind, err.error_code(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NetworkError, FETCH_FAILED_MESSAGE};
    use crate::models::{EnrichedPost, Post, User};

    fn posts(ids: &[u64]) -> ViewData {
        ViewData::Posts(
            ids.iter()
                .map(|&id| EnrichedPost {
                    post: Post::new(id, 1, ""),
                    user: User::new("1", "Alice"),
                    comment_count: 0,
                    image_url: String::new(),
                })
                .collect(),
        )
    }

    fn failure() -> ApiError {
        NetworkError::Timeout {
            url: "http://x".into(),
            message: "elapsed".into(),
        }
        .into()
    }

    #[test]
    fn test_starts_idle_and_unmounted() {
        let mut controller = ViewController::new(ViewKind::Feed);
        assert_eq!(controller.state(), &ViewState::Idle);
        assert!(controller.begin().is_none());
    }

    #[test]
    fn test_loading_then_ready() {
        let mut controller = ViewController::new(ViewKind::TopUsers);
        controller.mount();
        let token = controller.begin().unwrap();
        assert!(controller.is_loading());

        assert!(controller.complete(token, Ok(posts(&[1]))));
        assert_eq!(controller.state(), &ViewState::Ready(posts(&[1])));
        assert!(controller.last_updated().is_some());
    }

    #[test]
    fn test_feed_keeps_stale_data_on_error() {
        let mut controller = ViewController::new(ViewKind::Feed);
        controller.mount();
        let first = controller.begin().unwrap();
        controller.complete(first, Ok(posts(&[2, 1])));

        let second = controller.begin().unwrap();
        assert_eq!(controller.data(), Some(&posts(&[2, 1])));
        controller.complete(second, Err(failure()));

        assert_eq!(controller.error_message(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(controller.data(), Some(&posts(&[2, 1])));

        // and a later success replaces everything
        let third = controller.begin().unwrap();
        controller.complete(third, Ok(posts(&[3])));
        assert_eq!(controller.state(), &ViewState::Ready(posts(&[3])));
    }

    #[test]
    fn test_trending_drops_data_when_reloading() {
        let mut controller = ViewController::new(ViewKind::Trending);
        controller.mount();
        let first = controller.begin().unwrap();
        controller.complete(first, Ok(posts(&[1])));

        let second = controller.begin().unwrap();
        assert_eq!(controller.data(), None);
        controller.complete(second, Err(failure()));
        assert_eq!(controller.data(), None);
        assert!(controller.error_message().is_some());
    }

    #[test]
    fn test_stale_token_is_discarded() {
        let mut controller = ViewController::new(ViewKind::Feed);
        controller.mount();
        let older = controller.begin().unwrap();
        let newer = controller.begin().unwrap();
        assert!(newer > older);

        assert!(controller.complete(newer, Ok(posts(&[2]))));
        assert!(!controller.complete(older, Ok(posts(&[1]))));
        assert_eq!(controller.state(), &ViewState::Ready(posts(&[2])));
    }

    #[test]
    fn test_no_transitions_after_unmount() {
        let mut controller = ViewController::new(ViewKind::Feed);
        controller.mount();
        let token = controller.begin().unwrap();
        controller.unmount();

        assert!(!controller.complete(token, Ok(posts(&[1]))));
        assert!(controller.begin().is_none());
    }

    #[test]
    fn test_remount_rejects_previous_mount_tokens() {
        let mut controller = ViewController::new(ViewKind::TopUsers);
        let first_generation = controller.mount();
        let token = controller.begin().unwrap();
        controller.unmount();

        let second_generation = controller.mount();
        assert!(second_generation > first_generation);
        assert_eq!(controller.state(), &ViewState::Idle);
        let fresh = controller.begin().unwrap();
        assert!(!controller.complete(token, Ok(posts(&[9]))));
        assert!(controller.complete(fresh, Ok(posts(&[1]))));
    }
}
