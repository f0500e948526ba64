//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use crate::constants::APP_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Style guide document used when a command gets no `--guide` argument
    pub default_guide: Option<PathBuf>,
}

/// Export output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Directory auto-named export files are written to
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        // Use config directory for export output by default
        let output_dir =
            Self::default_output_dir().unwrap_or_else(|_| PathBuf::from("exports"));

        Self { output_dir }
    }
}

impl ExportSettings {
    /// Gets the default export output directory path.
    ///
    /// - Linux: `~/.config/Swatchbook/exports/`
    /// - macOS: `~/Library/Application Support/Swatchbook/exports/`
    /// - Windows: `%APPDATA%\Swatchbook\exports\`
    fn default_output_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("exports"))
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Swatchbook/config.toml`
/// - macOS: `~/Library/Application Support/Swatchbook/config.toml`
/// - Windows: `%APPDATA%\Swatchbook\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportSettings,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).with_context(|| {
            format!("Failed to read config file: {}", config_path.display())
        })?;

        let config: Self = toml::from_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", config_path.display())
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, &config_path).with_context(|| {
            format!("Failed to rename temp config file to: {}", config_path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - the default guide, if set, points at an existing `.toml`/`.json` file
    pub fn validate(&self) -> Result<()> {
        if let Some(guide_path) = &self.paths.default_guide {
            if !guide_path.exists() {
                anyhow::bail!(
                    "Default style guide does not exist: {}",
                    guide_path.display()
                );
            }

            let supported = guide_path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| {
                    let e = e.to_lowercase();
                    e == "toml" || e == "json"
                });
            if !supported {
                anyhow::bail!(
                    "Default style guide must be a .toml or .json file: {}",
                    guide_path.display()
                );
            }
        }

        Ok(())
    }
}
