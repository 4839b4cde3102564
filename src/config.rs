//! Client configuration from the environment

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration for the weather chat client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL; the query endpoint is `{base_url}/weather`
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client
    pub timeout: Option<Duration>,
    /// JSON log file (stdout belongs to the terminal UI)
    pub log_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            log_path: default_log_path(std::env::var("HOME").ok()),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("WEATHER_CHAT_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = lookup("WEATHER_CHAT_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let log_path = lookup("WEATHER_CHAT_LOG")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_log_path(lookup("HOME")));

        Self {
            base_url,
            timeout,
            log_path,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn query_url(&self) -> String {
        format!("{}/weather", self.base_url.trim_end_matches('/'))
    }

    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

fn default_log_path(home: Option<String>) -> PathBuf {
    let home = home.unwrap_or_else(|| "/tmp".to_string());
    PathBuf::from(home).join(".weather-chat").join("weather-chat.log")
}
