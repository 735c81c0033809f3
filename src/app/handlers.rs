//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage};
use crate::controller::spawn_fetch;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::RefreshDue { view, generation } => {
                let controller = self.controller(view);
                if view != self.view
                    || !controller.is_mounted()
                    || controller.generation() != generation
                {
                    debug!("Ignoring refresh for {} (generation {})", view, generation);
                    return;
                }

                let Some(token) = self.controller_mut(view).begin() else {
                    return;
                };
                self.in_flight.retain(|handle| !handle.is_finished());
                self.in_flight.push(spawn_fetch(
                    self.pipeline.clone(),
                    view,
                    token,
                    self.message_tx.clone(),
                ));
                self.mark_dirty();
            }
            AppMessage::ViewLoaded {
                view,
                token,
                result,
            } => {
                if self.controller_mut(view).complete(token, result) {
                    self.clamp_scroll();
                    self.mark_dirty();
                }
            }
        }
    }
}
