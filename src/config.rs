//! Client configuration.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. `~/.quickchat/config.json`, if present
//! 3. `QUICKCHAT_*` environment variables
//!
//! # Example
//!
//! ```ignore
//! use quickchat::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_api_base_url("http://localhost:5000")
//!     .with_request_timeout_secs(30);
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::adapters::notifier::DEFAULT_TOAST_TTL_TICKS;
use crate::api::DEFAULT_API_BASE_URL;
use crate::models::ChatMode;

/// Directory under the home directory holding config, token and log.
pub const CONFIG_DIR: &str = ".quickchat";

const CONFIG_FILE: &str = "config.json";

pub const ENV_API_URL: &str = "QUICKCHAT_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "QUICKCHAT_TIMEOUT_SECS";
pub const ENV_MODE: &str = "QUICKCHAT_MODE";
pub const ENV_LOG: &str = "QUICKCHAT_LOG";

/// Errors reading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Shape of `config.json`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileConfig {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    initial_mode: Option<ChatMode>,
    log_filter: Option<String>,
    toast_ttl_ticks: Option<u32>,
}

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL (default: http://localhost:3000)
    pub api_base_url: String,
    /// Per-request timeout in seconds (default: 120, image generation is slow)
    pub request_timeout_secs: u64,
    /// Mode the composer starts in
    pub initial_mode: ChatMode,
    /// `tracing_subscriber::EnvFilter` directive (default: info)
    pub log_filter: String,
    /// How long toasts stay visible, in 100ms ticks
    pub toast_ttl_ticks: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 120,
            initial_mode: ChatMode::Text,
            log_filter: "info".to_string(),
            toast_ttl_ticks: DEFAULT_TOAST_TTL_TICKS,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_initial_mode(mut self, mode: ChatMode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_toast_ttl_ticks(mut self, ticks: u32) -> Self {
        self.toast_ttl_ticks = ticks;
        self
    }

    /// `~/.quickchat`, if the home directory is known.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR))
    }

    /// Overlay the JSON file at `path` on top of `self`.
    pub fn merge_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(url) = file.api_base_url {
            self.api_base_url = url;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(mode) = file.initial_mode {
            self.initial_mode = mode;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
        if let Some(ticks) = file.toast_ttl_ticks {
            self.toast_ttl_ticks = ticks;
        }
        Ok(self)
    }

    /// Overlay variables looked up through `lookup`.
    pub fn merge_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: ENV_TIMEOUT_SECS,
                        value: raw.clone(),
                    })?;
        }
        if let Some(raw) = lookup(ENV_MODE) {
            self.initial_mode = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_MODE,
                value: raw.clone(),
            })?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        Ok(self)
    }

    /// Overlay the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().merge_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults, then the config file (if any), then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = Self::config_dir().map(|dir| dir.join(CONFIG_FILE)) {
            if path.exists() {
                config = config.merge_file(&path)?;
            }
        }
        config.merge_env_with(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.initial_mode, ChatMode::Text);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new()
            .with_api_base_url("http://x")
            .with_request_timeout_secs(5)
            .with_initial_mode(ChatMode::Image)
            .with_log_filter("debug")
            .with_toast_ttl_ticks(3);
        assert_eq!(config.api_base_url, "http://x");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.initial_mode, ChatMode::Image);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.toast_ttl_ticks, 3);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::default()
            .merge_env_with(lookup(&[
                (ENV_API_URL, "https://chat.example.com"),
                (ENV_TIMEOUT_SECS, "45"),
                (ENV_MODE, "image"),
            ]))
            .unwrap();
        assert_eq!(config.api_base_url, "https://chat.example.com");
        assert_eq!(config.request_timeout_secs, 45);
        assert_eq!(config.initial_mode, ChatMode::Image);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_env_invalid_values() {
        let err = ClientConfig::default()
            .merge_env_with(lookup(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_TIMEOUT_SECS, .. }));

        let err = ClientConfig::default()
            .merge_env_with(lookup(&[(ENV_MODE, "video")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid value 'video' for QUICKCHAT_MODE");
    }

    #[test]
    fn test_merge_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"apiBaseUrl": "http://file:4000", "initialMode": "image", "toastTtlTicks": 10}"#,
        )
        .unwrap();

        let config = ClientConfig::default().merge_file(&path).unwrap();
        assert_eq!(config.api_base_url, "http://file:4000");
        assert_eq!(config.initial_mode, ChatMode::Image);
        assert_eq!(config.toast_ttl_ticks, 10);
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn test_merge_file_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            ClientConfig::default().merge_file(&missing),
            Err(ConfigError::Io { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{not json").unwrap();
        assert!(matches!(
            ClientConfig::default().merge_file(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_API_URL, "http://env:9999");
        std::env::remove_var(ENV_TIMEOUT_SECS);
        std::env::remove_var(ENV_MODE);
        let config = ClientConfig::from_env().unwrap();
        std::env::remove_var(ENV_API_URL);
        assert_eq!(config.api_base_url, "http://env:9999");
    }
}
