//! Configuration management for contactbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting a TOML config file, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the user's config dir.
const APP_DIR_NAME: &str = "contactbook";

/// Default contacts file name.
pub const CONTACTS_FILE_NAME: &str = "contacts.json";

/// Default CSV export file name.
pub const EXPORT_FILE_NAME: &str = "contacts.csv";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "CONTACTBOOK_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CONTACTBOOK_`, sections split on `__`)
/// 2. TOML config file at `~/.config/contactbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Export configuration.
    pub export: ExportConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the contacts JSON file, relative to the working directory
    /// unless absolute.
    pub contacts_path: PathBuf,
    /// Create missing parent directories before writing.
    pub create_parent_dirs: bool,
}

/// Export-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Path of the CSV file written by the export command.
    pub csv_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            contacts_path: PathBuf::from(CONTACTS_FILE_NAME),
            create_parent_dirs: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(EXPORT_FILE_NAME),
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        Self::load_with_overrides(config_path, None, None)
    }

    /// Load configuration, then apply command-line path overrides.
    ///
    /// Validation runs after the overrides so a flag cannot point the export
    /// at the contacts file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation fails.
    pub fn load_with_overrides(
        config_path: Option<PathBuf>,
        contacts_path: Option<PathBuf>,
        csv_path: Option<PathBuf>,
    ) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let mut config: Config = figment.extract()?;
        config.apply_overrides(contacts_path, csv_path);
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.storage.contacts_path.as_os_str().is_empty() {
            return Err(Error::config_validation("contacts_path must not be empty"));
        }

        if self.export.csv_path.as_os_str().is_empty() {
            return Err(Error::config_validation("csv_path must not be empty"));
        }

        if self.storage.contacts_path == self.export.csv_path {
            return Err(Error::config_validation(format!(
                "csv_path cannot be the same file as contacts_path ({})",
                self.storage.contacts_path.display()
            )));
        }

        Ok(())
    }

    /// Replace the configured paths with command-line overrides.
    pub fn apply_overrides(&mut self, contacts_path: Option<PathBuf>, csv_path: Option<PathBuf>) {
        if let Some(path) = contacts_path {
            self.storage.contacts_path = path;
        }
        if let Some(path) = csv_path {
            self.export.csv_path = path;
        }
    }

    /// Get the contacts file path.
    #[must_use]
    pub fn contacts_path(&self) -> &Path {
        &self.storage.contacts_path
    }

    /// Get the CSV export path.
    #[must_use]
    pub fn export_path(&self) -> &Path {
        &self.export.csv_path
    }
}
