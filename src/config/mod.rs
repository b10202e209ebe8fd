//! Application configuration.
//!
//! Settings are read from a camelCase JSON file. Every field has a default so
//! a missing file, or a file with only some keys, still yields a usable
//! configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory name used under the platform config and data dirs
pub const APP_DIR_NAME: &str = "vocab";

/// Default config file name inside the config dir
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data dir
pub const DEFAULT_DATABASE_FILE: &str = "vocab.db";

/// Default idle lifetime of a session (two weeks)
pub const DEFAULT_SESSION_TTL_SECS: u64 = 1_209_600;

/// Error types for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid JSON for AppConfig
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Platform has no config/data directory
    #[error("Could not determine {0} directory")]
    NoDataDir(&'static str),
}

/// Top-level application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory holding the database file
    pub data_dir: PathBuf,
    /// Database file name, relative to `data_dir`
    pub database_file: String,
    /// Idle lifetime of a session, in seconds
    pub session_ttl_secs: u64,
    /// Log level filter (e.g. "info", "vocab_lib=debug"); `None` picks by build type
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().unwrap_or_else(|_| PathBuf::from(".").join(APP_DIR_NAME)),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Load settings from `path`, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            crate::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        crate::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load settings from the platform config directory
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&default_config_path()?)
    }

    /// Full path to the database file
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    /// Session idle lifetime
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Log filter to install: the configured one, or debug/info by build type
    pub fn log_filter(&self) -> String {
        self.log_level.clone().unwrap_or_else(|| {
            if cfg!(debug_assertions) {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        })
    }
}

/// Platform data directory for the app (e.g. ~/.local/share/vocab)
pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoDataDir("data"))
}

/// Platform config file path (e.g. ~/.config/vocab/config.json)
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoDataDir("config"))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
