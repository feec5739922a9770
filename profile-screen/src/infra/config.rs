use std::path::{Path, PathBuf};
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const APP_DIR: &str = "profile-screen";
pub const SERVER_URL_ENV: &str = "PROFILE_SERVER_URL";
pub const TOKEN_STORE_ENV: &str = "PROFILE_TOKEN_STORE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Format(#[from] serde_json::Error),
    #[error("no config directory available on this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL the `/profile` paths are appended to.
    pub server_url: String,
    /// JSON key-value file holding the bearer token. Defaults to the
    /// platform data directory.
    pub token_store_path: Option<PathBuf>,
    /// Per-request timeout. Requests wait indefinitely when unset.
    pub request_timeout_secs: Option<u64>,
    /// How long a success toast stays up.
    pub toast_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000/api".to_string(),
            token_store_path: None,
            request_timeout_secs: None,
            toast_duration_ms: 3000,
        }
    }
}

impl Config {
    /// Defaults, then the config file, then environment overrides.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|err| {
                warn!(
                    "Ignoring config file {}: {}",
                    path.display(),
                    err
                );
                Self::default()
            }),
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Read a config file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply environment style overrides looked up through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(server_url) = lookup(SERVER_URL_ENV)
            && !server_url.trim().is_empty()
        {
            self.server_url = server_url;
        }
        if let Some(path) = lookup(TOKEN_STORE_ENV)
            && !path.trim().is_empty()
        {
            self.token_store_path = Some(PathBuf::from(path));
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
    }

    /// Where the bearer token lives.
    pub fn token_store_path(&self) -> PathBuf {
        self.token_store_path
            .clone()
            .or_else(|| {
                dirs::data_dir()
                    .map(|dir| dir.join(APP_DIR).join("storage.json"))
            })
            .unwrap_or_else(|| PathBuf::from("storage.json"))
    }

    /// Per-request timeout; `0` means none.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            server_url: "https://profiles.example.com/api".into(),
            token_store_path: Some(dir.path().join("storage.json")),
            request_timeout_secs: Some(10),
            toast_duration_ms: 1500,
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"server_url":"http://other:8080"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server_url, "http://other:8080");
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn zero_timeout_means_no_timeout() {
        let config = Config {
            request_timeout_secs: Some(0),
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), None);

        let config = Config {
            request_timeout_secs: Some(30),
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Format(_))
        ));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            SERVER_URL_ENV => Some("http://env-host/api".to_string()),
            TOKEN_STORE_ENV => Some("/tmp/tokens.json".to_string()),
            _ => None,
        });

        assert_eq!(config.server_url, "http://env-host/api");
        assert_eq!(
            config.token_store_path(),
            PathBuf::from("/tmp/tokens.json")
        );
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }
}
