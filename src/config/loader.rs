use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;
use crate::storage::is_valid_key;

const APP_DIR: &str = "leavedesk";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/leavedesk/config.toml` on Linux, or the equivalent
    /// via `dirs::config_dir()` elsewhere. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join(APP_DIR).join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The whole-tree key is usable as a storage key
    /// - The whitelist names no slice twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let persistence = &self.persistence;
        if !is_valid_key(&persistence.root_key) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "root_key '{}' may only contain letters, digits, '_' and '-'",
                    persistence.root_key
                ),
            });
        }

        for (i, key) in persistence.whitelist.iter().enumerate() {
            if persistence.whitelist[..i].contains(key) {
                return Err(ConfigError::ValidationError {
                    message: format!("slice '{}' listed twice in whitelist", key),
                });
            }
        }

        Ok(())
    }

    /// Directory for persisted state.
    ///
    /// `storage.data_dir` if set, else `<data dir>/leavedesk`, else
    /// `./.leavedesk`.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.storage.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")))
    }
}
