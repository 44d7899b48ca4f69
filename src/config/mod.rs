// SPDX-License-Identifier: MPL-2.0
//! Exporter configuration, persisted as a `settings.toml` file.
//!
//! The config selects the gallery store the process writes into: which
//! strategy to use, where the gallery root lives, the destination subfolder
//! hint, and whether the indexed store supports scoped staging.

pub mod defaults;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use defaults::{DEFAULT_RELATIVE_PATH, DEFAULT_SCOPED_STAGING};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GalleryExport";

/// Which storage model the staged writer targets, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Content-index-mediated store (pending-then-finalize writes).
    IndexedStore,
    /// Permissioned, transactional asset library.
    AssetLibrary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Gallery root directory; defaults to the user's Videos folder.
    pub gallery_dir: Option<PathBuf>,
    /// Destination subfolder hint below the gallery root.
    #[serde(default)]
    pub relative_path: Option<String>,
    /// Whether the indexed store stages records as pending.
    #[serde(default)]
    pub scoped_staging: Option<bool>,
    /// Storage strategy; defaults to the indexed store.
    #[serde(default)]
    pub strategy: Option<Strategy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gallery_dir: None,
            relative_path: Some(DEFAULT_RELATIVE_PATH.to_string()),
            scoped_staging: Some(DEFAULT_SCOPED_STAGING),
            strategy: Some(Strategy::IndexedStore),
        }
    }
}

impl Config {
    /// Resolved gallery root: the configured directory, else the user's
    /// Videos folder, else the current directory.
    #[must_use]
    pub fn resolved_gallery_dir(&self) -> PathBuf {
        self.gallery_dir.clone().unwrap_or_else(|| {
            dirs::video_dir().unwrap_or_else(|| PathBuf::from("."))
        })
    }

    /// Resolved destination subfolder hint.
    #[must_use]
    pub fn resolved_relative_path(&self) -> String {
        self.relative_path
            .clone()
            .unwrap_or_else(|| DEFAULT_RELATIVE_PATH.to_string())
    }

    /// Resolved scoped-staging capability.
    #[must_use]
    pub fn resolved_scoped_staging(&self) -> bool {
        self.scoped_staging.unwrap_or(DEFAULT_SCOPED_STAGING)
    }

    /// Resolved storage strategy.
    #[must_use]
    pub fn resolved_strategy(&self) -> Strategy {
        self.strategy.unwrap_or(Strategy::IndexedStore)
    }
}

/// Errors raised while loading or saving the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Filesystem failure.
    Io(io::Error),
    /// The file could not be serialized.
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {err}"),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the config from the default location, or defaults if absent.
///
/// # Errors
///
/// Returns a [`ConfigError`] if an existing file cannot be read.
pub fn load() -> Result<Config, ConfigError> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads a config from a specific path; invalid TOML yields defaults.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves a config to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns a [`ConfigError`] on serialization or write failure.
pub fn save_to_path(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            gallery_dir: Some(PathBuf::from("/data/gallery")),
            relative_path: Some("Movies/Custom".to_string()),
            scoped_staging: Some(false),
            strategy: Some(Strategy::AssetLibrary),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.gallery_dir, config.gallery_dir);
        assert_eq!(loaded.relative_path, config.relative_path);
        assert_eq!(loaded.scoped_staging, config.scoped_staging);
        assert_eq!(loaded.strategy, config.strategy);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.resolved_strategy(), Strategy::IndexedStore);
    }

    #[test]
    fn resolved_values_fall_back_to_defaults() {
        let config = Config {
            gallery_dir: None,
            relative_path: None,
            scoped_staging: None,
            strategy: None,
        };

        assert_eq!(config.resolved_relative_path(), DEFAULT_RELATIVE_PATH);
        assert_eq!(config.resolved_scoped_staging(), DEFAULT_SCOPED_STAGING);
        assert_eq!(config.resolved_strategy(), Strategy::IndexedStore);
    }
}
