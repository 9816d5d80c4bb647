use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::menu_source::DEFAULT_MENU_URL;

pub const ENV_MENU_URL: &str = "LITTLE_LEMON_MENU_URL";
pub const ENV_DB_PATH: &str = "LITTLE_LEMON_DB_PATH";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "LITTLE_LEMON_HTTP_TIMEOUT_SECS";
pub const ENV_CHANNEL_CAPACITY: &str = "LITTLE_LEMON_CHANNEL_CAPACITY";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid HTTP timeout {0:?}: expected whole seconds")]
    InvalidTimeout(String),
    #[error("Invalid channel capacity {0:?}: expected a positive integer")]
    InvalidCapacity(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub menu_url: String,
    pub database_path: PathBuf,
    /// `None` lets a request wait forever.
    pub request_timeout: Option<Duration>,
    /// Bound of every actor mailbox.
    pub channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            menu_url: DEFAULT_MENU_URL.to_string(),
            database_path: PathBuf::from("little_lemon.db"),
            request_timeout: Some(Duration::from_secs(30)),
            channel_capacity: 32,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` knows about.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_MENU_URL) {
            config.menu_url = url;
        }
        if let Some(path) = lookup(ENV_DB_PATH) {
            config.database_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            // 0 disables the timeout
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(raw) = lookup(ENV_CHANNEL_CAPACITY) {
            config.channel_capacity = raw
                .trim()
                .parse()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or_else(|| ConfigError::InvalidCapacity(raw.clone()))?;
        }

        Ok(config)
    }
}
