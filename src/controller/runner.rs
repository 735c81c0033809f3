use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{RequestToken, ViewKind};
use crate::app::AppMessage;
use crate::pipeline::Pipeline;

/// Run one fetch cycle for `view` in the background and report the outcome
/// as `AppMessage::ViewLoaded`.
pub fn spawn_fetch(
    pipeline: Pipeline,
    view: ViewKind,
    token: RequestToken,
    tx: UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let started = Instant::now();
        debug!("Fetch cycle {} for {} view started", token.value(), view);

        let result = pipeline.load(view).await;

        debug!(
            "Fetch cycle {} for {} view finished in {:?} (ok={})",
            token.value(),
            view,
            started.elapsed(),
            result.is_ok()
        );
        // Receiver gone means the app is shutting down
        let _ = tx.send(AppMessage::ViewLoaded {
            view,
            token,
            result,
        });
    })
}
