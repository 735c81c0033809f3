//! Refresh timer owned by a mounted view.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::ViewKind;
use crate::app::AppMessage;

/// Sends `RefreshDue` for one mounted view: once immediately, then every
/// `interval` if one is set.
///
/// The timer task is aborted when the schedule is cancelled or dropped.
#[derive(Debug)]
pub struct RefreshSchedule {
    handle: Option<JoinHandle<()>>,
}

impl RefreshSchedule {
    /// Spawn the timer task. Must be called within a Tokio runtime.
    pub fn start(
        view: ViewKind,
        generation: u64,
        interval: Option<Duration>,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            if tx.send(AppMessage::RefreshDue { view, generation }).is_err() {
                return;
            }
            let Some(period) = interval else {
                return;
            };

            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(AppMessage::RefreshDue { view, generation }).is_err() {
                    break;
                }
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Whether the timer task is still running.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the timer. No `RefreshDue` is sent after this returns, apart
    /// from ones already queued.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for RefreshSchedule {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn refresh_count(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> usize {
        let mut count = 0;
        while let Ok(message) = rx.try_recv() {
            if matches!(message, AppMessage::RefreshDue { .. }) {
                count += 1;
            }
        }
        count
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_without_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let schedule = RefreshSchedule::start(ViewKind::TopUsers, 1, None, tx);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(refresh_count(&mut rx), 1);
        assert!(!schedule.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_on_every_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _schedule =
            RefreshSchedule::start(ViewKind::Feed, 3, Some(Duration::from_secs(30)), tx);

        tokio::time::sleep(Duration::from_secs(95)).await;
        // immediate + 30s + 60s + 90s
        assert_eq!(refresh_count(&mut rx), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut schedule =
            RefreshSchedule::start(ViewKind::Feed, 1, Some(Duration::from_secs(30)), tx);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(refresh_count(&mut rx), 1);

        schedule.cancel();
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(refresh_count(&mut rx), 0);
        assert!(!schedule.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_messages_carry_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _schedule = RefreshSchedule::start(ViewKind::Trending, 7, None, tx);
        tokio::time::sleep(Duration::from_millis(1)).await;

        match rx.try_recv() {
            Ok(AppMessage::RefreshDue { view, generation }) => {
                assert_eq!(view, ViewKind::Trending);
                assert_eq!(generation, 7);
            }
            other => panic!("expected RefreshDue, got {:?}", other),
        }
    }
}
