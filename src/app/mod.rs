//! Application state for the dashboard.
//!
//! [`App`] owns one [`ViewController`] per view and mounts exactly one of
//! them at a time, the one the navbar points at. All controller state is
//! mutated on the UI loop; background tasks only send [`AppMessage`]s.

mod handlers;
mod messages;
mod navigation;

pub use messages::AppMessage;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::DashboardConfig;
use crate::controller::{RefreshSchedule, ViewController, ViewKind};
use crate::pipeline::Pipeline;

/// Main application state
pub struct App {
    /// View currently shown (and mounted)
    pub view: ViewKind,
    /// One controller per view, indexed by `ViewKind::index`
    controllers: [ViewController; 3],
    /// Timer of the mounted view
    schedule: Option<RefreshSchedule>,
    /// Fetch cycles started by the mounted view that may still be running
    in_flight: Vec<JoinHandle<()>>,
    pipeline: Pipeline,
    config: DashboardConfig,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub should_quit: bool,
    /// Set whenever visible state changes
    pub needs_redraw: bool,
    /// First visible row of the current view
    pub scroll_offset: usize,
    /// Animation tick counter
    pub tick_count: u64,
}

impl App {
    pub fn new(pipeline: Pipeline, config: DashboardConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            view: ViewKind::default(),
            controllers: ViewKind::ALL.map(ViewController::new),
            schedule: None,
            in_flight: Vec::new(),
            pipeline,
            config,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true,
            scroll_offset: 0,
            tick_count: 0,
        }
    }

    pub fn controller(&self, view: ViewKind) -> &ViewController {
        &self.controllers[view.index()]
    }

    fn controller_mut(&mut self, view: ViewKind) -> &mut ViewController {
        &mut self.controllers[view.index()]
    }

    /// Controller of the view currently shown.
    pub fn current(&self) -> &ViewController {
        self.controller(self.view)
    }

    /// Mount the current view. Must be called within a Tokio runtime.
    pub fn start(&mut self) {
        self.mount(self.view);
    }

    /// Whether a refresh timer is running for the mounted view.
    pub fn has_active_schedule(&self) -> bool {
        self.schedule.as_ref().is_some_and(|s| s.is_active())
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.current().is_loading() {
            self.mark_dirty();
        }
    }

    /// Unmount everything and flag the loop to exit.
    pub fn quit(&mut self) {
        self.unmount(self.view);
        self.should_quit = true;
    }

    fn mount(&mut self, view: ViewKind) {
        let generation = self.controller_mut(view).mount();
        let interval = view.refresh_interval(self.config.feed_refresh_interval);
        self.schedule = Some(RefreshSchedule::start(
            view,
            generation,
            interval,
            self.message_tx.clone(),
        ));
        self.mark_dirty();
    }

    fn unmount(&mut self, view: ViewKind) {
        if let Some(mut schedule) = self.schedule.take() {
            schedule.cancel();
        }
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        self.controller_mut(view).unmount();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
    }
}
