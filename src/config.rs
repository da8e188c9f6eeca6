//! User configuration, read from `<config_dir>/contact-form/config.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory name used under the platform config and data directories.
pub const APP_DIR: &str = "contact-form";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid JSON for [`Config`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The platform does not provide a data directory.
    #[error("could not determine data directory")]
    NoDataDir,
}

/// Runtime configuration. Missing keys take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing` filter directive, e.g. `"info"` or `"contact_form=debug"`.
    pub log_filter: String,
    /// Log file location; defaults to `<data_dir>/contact-form/contact-form.log`.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads the config from the platform config directory.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(config_dir.join(APP_DIR).join("config.json"))
    }

    /// Loads the config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolves where log output should be written.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => {
                let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
                Ok(data_dir.join(APP_DIR).join("contact-form.log"))
            }
        }
    }
}
