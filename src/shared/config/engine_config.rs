//! Engine configuration
//!
//! Externalizes the per-call timeouts, the browser-like user agent sent to
//! upstream sites and listing defaults so they can be tuned without code changes.

use std::time::Duration;

/// Browser-like User-Agent; several upstream sites reject obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

const ENV_CATEGORY_TIMEOUT: &str = "VODSCOPE_CATEGORY_TIMEOUT_SECS";
const ENV_VIDEO_TIMEOUT: &str = "VODSCOPE_VIDEO_TIMEOUT_SECS";
const ENV_SEARCH_TIMEOUT: &str = "VODSCOPE_SEARCH_TIMEOUT_SECS";
const ENV_USER_AGENT: &str = "VODSCOPE_USER_AGENT";
const ENV_PAGE_SIZE: &str = "VODSCOPE_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Timeout for `?ac=list` category requests
    pub category_timeout: Duration,

    /// Timeout for `?ac=videolist` listing requests
    pub video_timeout: Duration,

    /// Timeout for `?ac=videolist&wd=` search requests
    pub search_timeout: Duration,

    /// User-Agent header sent with every upstream request
    pub user_agent: String,

    /// Page size reported back when the caller does not pass one
    pub default_page_size: u32,
}

impl EngineConfig {
    /// Creates a new configuration with production defaults
    pub fn new() -> Self {
        Self {
            category_timeout: Duration::from_secs(10),
            video_timeout: Duration::from_secs(15),
            search_timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_page_size: 20,
        }
    }

    /// Load configuration from the environment (and `.env` if present).
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::new();
        Self {
            category_timeout: read_secs(ENV_CATEGORY_TIMEOUT, defaults.category_timeout),
            video_timeout: read_secs(ENV_VIDEO_TIMEOUT, defaults.video_timeout),
            search_timeout: read_secs(ENV_SEARCH_TIMEOUT, defaults.search_timeout),
            user_agent: std::env::var(ENV_USER_AGENT)
                .ok()
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            default_page_size: read_parsed(ENV_PAGE_SIZE, defaults.default_page_size),
        }
    }

    pub fn with_timeouts(mut self, category: Duration, video: Duration, search: Duration) -> Self {
        self.category_timeout = category;
        self.video_timeout = video;
        self.search_timeout = search;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.category_timeout.is_zero()
            || self.video_timeout.is_zero()
            || self.search_timeout.is_zero()
        {
            return Err("Timeouts must be greater than zero".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        if self.default_page_size == 0 {
            return Err("Default page size must be at least 1".to_string());
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_secs(key: &str, default: Duration) -> Duration {
    Duration::from_secs(read_parsed(key, default.as_secs()))
}

fn read_parsed<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring invalid value '{}' for {}", raw, key);
                default
            }
        },
        Err(_) => default,
    }
}
