//! Configuration for the mailroom binary.
//!
//! Values are layered with figment: built-in defaults, then a TOML file,
//! then `MAILROOM_` environment variables.

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::common::error::{AppError, Result};

/// Default configuration file, looked up in the working directory.
const CONFIG_FILE_NAME: &str = "mailroom.toml";

const DEFAULT_SNAPSHOT: &str = "donors.json";

const DEFAULT_LETTERS_DIR: &str = "letters";

/// Application configuration.
///
/// Loaded from (highest precedence first):
/// 1. Environment variables such as `MAILROOM_STORAGE__SNAPSHOT_PATH`
/// 2. The TOML config file
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON snapshot holding every donor and their donations.
    pub snapshot_path: PathBuf,
    /// Where `letters` writes thank-you letters.
    pub letters_dir: PathBuf,
    /// Write the snapshot back after commands that change donors.
    pub autosave: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT),
            letters_dir: PathBuf::from(DEFAULT_LETTERS_DIR),
            autosave: true,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path. A missing
    /// config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or environment holds values that do not
    /// parse, or if validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("MAILROOM_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        tracing::debug!(?config, file = %config_file.display(), "configuration loaded");
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if any path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.storage.snapshot_path.as_os_str().is_empty() {
            return Err(AppError::ConfigValidation {
                message: "storage.snapshot_path must not be empty".to_string(),
            });
        }
        if self.storage.letters_dir.as_os_str().is_empty() {
            return Err(AppError::ConfigValidation {
                message: "storage.letters_dir must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
