//! Dashboard configuration.
//!
//! Defaults match the public test API; every field can be overridden through
//! the builder methods or the `FEEDBOARD_*` environment variables.

use std::time::Duration;
use tracing::warn;

/// Default remote API endpoint.
pub const DEFAULT_BASE_URL: &str = "http://20.244.56.144/test";

pub const ENV_API_URL: &str = "FEEDBOARD_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "FEEDBOARD_TIMEOUT_SECS";
pub const ENV_REFRESH_SECS: &str = "FEEDBOARD_REFRESH_SECS";
pub const ENV_TOP_USERS: &str = "FEEDBOARD_TOP_USERS";

/// Configuration shared by the data client and the view controllers.
///
/// # Example
///
/// ```ignore
/// use feedboard::config::DashboardConfig;
/// use std::time::Duration;
///
/// let config = DashboardConfig::default()
///     .with_base_url("http://localhost:9000")
///     .with_feed_refresh_interval(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base endpoint all resource paths are appended to
    pub base_url: String,
    /// Connect + response timeout for every request (default: 10s)
    pub request_timeout: Duration,
    /// How often the feed view refetches while shown (default: 30s)
    pub feed_refresh_interval: Duration,
    /// Number of users in the top users view (default: 5)
    pub top_users_limit: usize,
    /// Post card image width
    pub image_width: u32,
    /// Post card image height
    pub image_height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            feed_refresh_interval: Duration::from_secs(30),
            top_users_limit: 5,
            image_width: 400,
            image_height: 300,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. A trailing `/` is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_feed_refresh_interval(mut self, interval: Duration) -> Self {
        self.feed_refresh_interval = interval;
        self
    }

    pub fn with_top_users_limit(mut self, limit: usize) -> Self {
        self.top_users_limit = limit;
        self
    }

    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Build a config from the `FEEDBOARD_*` environment variables.
    ///
    /// Values that are missing keep their defaults; values that fail to
    /// parse, or are zero, are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_API_URL) {
            if url.trim().is_empty() {
                warn!("{} is empty, using {}", ENV_API_URL, config.base_url);
            } else {
                config = config.with_base_url(url.trim());
            }
        }
        if let Some(secs) = positive_env(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = positive_env(ENV_REFRESH_SECS) {
            config.feed_refresh_interval = Duration::from_secs(secs);
        }
        if let Some(limit) = positive_env(ENV_TOP_USERS) {
            config.top_users_limit = limit as usize;
        }

        config
    }
}

fn positive_env(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(0) => {
            warn!("{} must be greater than zero, ignoring", name);
            None
        }
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", name, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.base_url, "http://20.244.56.144/test");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.feed_refresh_interval, Duration::from_secs(30));
        assert_eq!(config.top_users_limit, 5);
        assert_eq!((config.image_width, config.image_height), (400, 300));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = DashboardConfig::new().with_base_url("http://localhost:9000/api/");
        assert_eq!(config.base_url, "http://localhost:9000/api");
    }

    #[test]
    fn test_builder_chain() {
        let config = DashboardConfig::new()
            .with_request_timeout(Duration::from_secs(3))
            .with_feed_refresh_interval(Duration::from_millis(50))
            .with_top_users_limit(2)
            .with_image_size(10, 20);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.feed_refresh_interval, Duration::from_millis(50));
        assert_eq!(config.top_users_limit, 2);
        assert_eq!((config.image_width, config.image_height), (10, 20));
    }
}
