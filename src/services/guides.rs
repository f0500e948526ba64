//! Style guide document I/O service.
//!
//! This module centralizes all guide file operations, providing a consistent
//! interface for loading and saving style guide documents in TOML or JSON.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::models::{GuideDocument, StyleGuide};

/// Service for managing style guide file I/O operations.
///
/// The on-disk format is chosen by extension: `.toml` documents go through
/// the TOML parser, `.json` documents through serde_json. Both deserialize
/// into [`GuideDocument`] and are rebuilt through record constructors, so a
/// loaded guide always satisfies its invariants.
pub struct GuideService;

impl GuideService {
    /// Loads a style guide from a TOML or JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, fails to parse, or contains invalid records.
    pub fn load(path: &Path) -> Result<StyleGuide> {
        Self::load_document(path)?
            .into_guide()
            .with_context(|| format!("Invalid style guide: {}", path.display()))
    }

    /// Loads the raw document form of a style guide, parsing but not yet
    /// constructing records. Used by validation to report on documents that
    /// would be rejected by [`GuideService::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or fails to parse.
    pub fn load_document(path: &Path) -> Result<GuideDocument> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read style guide: {}", path.display()))?;

        let document: GuideDocument = match Self::extension(path)?.as_str() {
            "toml" => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML style guide: {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON style guide: {}", path.display()))?,
            other => anyhow::bail!(
                "Unsupported style guide format '.{other}' for {} (expected .toml or .json)",
                path.display()
            ),
        };

        Ok(document)
    }

    /// Saves a style guide to a TOML or JSON document.
    ///
    /// This performs an atomic write using a temp file + rename pattern to
    /// ensure the file is never left in a corrupted state.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization failure, unsupported extension, or
    /// any I/O error.
    pub fn save(guide: &StyleGuide, path: &Path) -> Result<()> {
        let content = match Self::extension(path)?.as_str() {
            "toml" => toml::to_string_pretty(guide).context("Failed to serialize style guide")?,
            "json" => {
                let mut json = serde_json::to_string_pretty(guide)
                    .context("Failed to serialize style guide")?;
                json.push('\n');
                json
            }
            other => anyhow::bail!(
                "Unsupported style guide format '.{other}' for {} (expected .toml or .json)",
                path.display()
            ),
        };

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

        Ok(())
    }

    /// Resolves which guide a command should operate on: an explicit path if
    /// given, otherwise the configured default guide, otherwise the embedded
    /// default.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen document fails to load.
    pub fn resolve(explicit: Option<&Path>, config: &Config) -> Result<StyleGuide> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = config.paths.default_guide.as_deref() {
            return Self::load(path);
        }

        StyleGuide::builtin()
    }

    fn extension(path: &Path) -> Result<String> {
        path.extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .with_context(|| format!("Style guide path has no extension: {}", path.display()))
    }
}
