use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::LayoutConfig;

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

impl LayoutConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/lazylayout/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory if none is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("lazylayout").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `LayoutConfig::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(LayoutConfig::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Checks:
    /// - fade legs have a non-zero duration
    /// - template names are not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.animation_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "timing.animation_ms must be greater than zero".to_string(),
            });
        }

        for (field, value) in [
            ("loading_layout", &self.loading_layout),
            ("error_layout", &self.error_layout),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must name a template", field),
                });
            }
        }

        Ok(())
    }
}
