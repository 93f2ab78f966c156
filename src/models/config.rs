//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::rules::NamingConfig;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination root for renamed files. The `--destination` flag wins
    /// over this; with neither set, the current directory is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    /// Source tag assumed for files that carry no origin information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_source: Option<String>,
    /// Naming rules and sanitization settings.
    pub naming: NamingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination: None,
            default_source: None,
            naming: NamingConfig::default(),
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media-utilities")
}

/// Default location of the config file.
pub fn config_file_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration.
///
/// An explicit path must exist and parse. The default location is
/// optional, but a file that exists there must also parse; a broken
/// config aborts instead of silently falling back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound(path.display().to_string()));
            }
            read_config(path)
        }
        None => {
            let path = config_file_path();
            if path.exists() {
                read_config(&path)
            } else {
                tracing::debug!("No config file at {}, using defaults", path.display());
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|e| Error::ConfigInvalid {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}
