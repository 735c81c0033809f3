//! AppMessage enum for async communication within the application.

use crate::controller::{RequestToken, ViewKind};
use crate::error::ApiResult;
use crate::pipeline::ViewData;

/// Messages received from background tasks (refresh timers, fetch cycles)
#[derive(Debug)]
pub enum AppMessage {
    /// A mounted view's schedule asks for a new fetch cycle
    RefreshDue { view: ViewKind, generation: u64 },
    /// A fetch cycle finished
    ViewLoaded {
        view: ViewKind,
        token: RequestToken,
        result: ApiResult<ViewData>,
    },
}
