use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::error::{DashboardError, Result};

pub const DEFAULT_FEED_URL: &str = "https://gong2.nso.edu/products/hAlphaLatest/hac.php";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_ICONS_DIR: &str = "icons";
pub const DEFAULT_REFRESH_SECS: u32 = 60;

pub const FEED_URL_VAR: &str = "HALPHA_FEED_URL";
pub const BIND_VAR: &str = "HALPHA_BIND";
pub const ICONS_DIR_VAR: &str = "HALPHA_ICONS_DIR";
pub const REFRESH_SECS_VAR: &str = "HALPHA_REFRESH_SECS";
pub const REQUEST_TIMEOUT_VAR: &str = "HALPHA_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub feed_url: String,
    pub bind_addr: SocketAddr,
    pub icons_dir: PathBuf,
    /// Length of the countdown between polls, in seconds.
    pub refresh_secs: u32,
    /// Unset leaves the HTTP client without a timeout.
    pub request_timeout: Option<Duration>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
            icons_dir: PathBuf::from(DEFAULT_ICONS_DIR),
            refresh_secs: DEFAULT_REFRESH_SECS,
            request_timeout: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(FEED_URL_VAR) {
            config.feed_url = url;
        }
        if let Some(bind) = lookup(BIND_VAR) {
            config.bind_addr = parse_var(BIND_VAR, &bind)?;
        }
        if let Some(dir) = lookup(ICONS_DIR_VAR) {
            config.icons_dir = PathBuf::from(dir);
        }
        if let Some(secs) = lookup(REFRESH_SECS_VAR) {
            config.refresh_secs = parse_var(REFRESH_SECS_VAR, &secs)?;
        }
        if let Some(secs) = lookup(REQUEST_TIMEOUT_VAR) {
            config.request_timeout =
                Some(Duration::from_secs(parse_var(REQUEST_TIMEOUT_VAR, &secs)?));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.feed_url).map_err(|err| {
            DashboardError::Config(format!("feed url {:?} is invalid: {err}", self.feed_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DashboardError::Config(format!(
                "feed url must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.refresh_secs == 0 {
            return Err(DashboardError::Config(
                "refresh interval must be at least one second".into(),
            ));
        }
        if self.request_timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(DashboardError::Config(
                "request timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err| DashboardError::Config(format!("{key}={raw:?} is invalid: {err}")))
}
