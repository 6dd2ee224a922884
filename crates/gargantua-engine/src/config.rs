//! Configuration types for gargantua engine.
//!
//! This module defines the configuration schema: where the module listing
//! lives, which API version folder it is served under, and UI timing.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for gargantua.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend serving the module listing.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Version folder the listing endpoint is served under.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Version folder used when labelling detail views.
    ///
    /// Falls back to `api_version` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_version: Option<String>,

    /// UI tick rate in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".into()
}

fn default_api_version() -> String {
    "v4".into()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_version: default_api_version(),
            view_version: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Full URL of the module listing endpoint.
    ///
    /// Tolerates a trailing slash on the base URL.
    pub fn listing_url(&self) -> String {
        format!(
            "{}/{}/modules/",
            self.api_base_url.trim_end_matches('/'),
            self.api_version
        )
    }

    /// Version folder for detail views.
    pub fn view_version(&self) -> &str {
        self.view_version.as_deref().unwrap_or(&self.api_version)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.api_version, "v4");
        assert_eq!(config.view_version, None);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_listing_url() {
        let config = Config::default();
        assert_eq!(config.listing_url(), "http://127.0.0.1:8000/v4/modules/");

        let config = Config {
            api_base_url: "http://example.test/".into(),
            api_version: "v2".into(),
            ..Config::default()
        };
        assert_eq!(config.listing_url(), "http://example.test/v2/modules/");
    }

    #[test]
    fn test_view_version_follows_api_version() {
        let mut config = Config::default();
        assert_eq!(config.view_version(), "v4");

        config.view_version = Some("v1".into());
        assert_eq!(config.view_version(), "v1");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_version":"v5"}"#).unwrap();
        assert_eq!(config.api_version, "v5");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            api_base_url: "http://localhost:9000".into(),
            view_version: Some("v1".into()),
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
