//! The style guide aggregate: colors, fonts, and typography tokens.
//!
//! A [`StyleGuide`] is built once from a document (TOML/JSON on disk, or the
//! embedded default) and owns all records. Derived display attributes are
//! recomputed through record constructors at load time, so a loaded guide
//! always satisfies its invariants regardless of what the document stored.

use crate::accessibility;
use crate::models::{ColorRecord, FontRecord, HeadingTag, RgbColor, TypographyRecord};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive metadata for a style guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideMetadata {
    /// Display name of the guide
    pub name: String,
    /// Version string
    pub version: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Author or team name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Default for GuideMetadata {
    fn default() -> Self {
        Self {
            name: "Untitled Style Guide".to_string(),
            version: "1.0.0".to_string(),
            description: None,
            author: None,
        }
    }
}

/// An in-memory style guide dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleGuide {
    /// Guide metadata
    pub metadata: GuideMetadata,
    /// Color swatches, in display order
    pub colors: Vec<ColorRecord>,
    /// Font families, in display order
    pub fonts: Vec<FontRecord>,
    /// Typography tokens, in display order
    pub typography: Vec<TypographyRecord>,
}

impl StyleGuide {
    /// Creates an empty guide with the given metadata.
    #[must_use]
    pub const fn new(metadata: GuideMetadata) -> Self {
        Self {
            metadata,
            colors: Vec::new(),
            fonts: Vec::new(),
            typography: Vec::new(),
        }
    }

    /// Loads the embedded default style guide.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails to parse; this only
    /// happens when the shipped data is broken.
    pub fn builtin() -> Result<Self> {
        let json = include_str!("../data/default_guide.json");
        let document: GuideDocument =
            serde_json::from_str(json).context("Failed to parse embedded style guide")?;
        document.into_guide()
    }

    /// Adds a color, enforcing name uniqueness.
    ///
    /// # Errors
    ///
    /// Returns an error if a color with the same name already exists.
    pub fn add_color(&mut self, color: ColorRecord) -> Result<()> {
        if self.color(&color.name).is_some() {
            anyhow::bail!("A color named '{}' already exists", color.name);
        }
        self.colors.push(color);
        Ok(())
    }

    /// Replaces the color named `name` with a freshly constructed record.
    ///
    /// This is the only mutation path for existing colors: callers build the
    /// replacement (via [`ColorRecord::recolored`] or similar) and swap it in
    /// by key, so no half-updated record is ever observable.
    ///
    /// # Errors
    ///
    /// Returns an error if the color does not exist, is not editable, or the
    /// replacement's name collides with a different existing color.
    pub fn replace_color(&mut self, name: &str, replacement: ColorRecord) -> Result<()> {
        let index = self
            .colors
            .iter()
            .position(|c| c.name == name)
            .with_context(|| format!("No color named '{name}' in the guide"))?;

        if !self.colors[index].editable {
            anyhow::bail!("Color '{name}' is not editable");
        }

        if replacement.name != name && self.color(&replacement.name).is_some() {
            anyhow::bail!("A color named '{}' already exists", replacement.name);
        }

        self.colors[index] = replacement;
        Ok(())
    }

    /// Removes and returns the color named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the color does not exist or is not editable.
    pub fn remove_color(&mut self, name: &str) -> Result<ColorRecord> {
        let index = self
            .colors
            .iter()
            .position(|c| c.name == name)
            .with_context(|| format!("No color named '{name}' in the guide"))?;

        if !self.colors[index].editable {
            anyhow::bail!("Color '{name}' is not editable");
        }

        Ok(self.colors.remove(index))
    }

    /// Looks up a color by exact name.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<&ColorRecord> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// Adds a font, enforcing class-name uniqueness.
    ///
    /// # Errors
    ///
    /// Returns an error if a font with the same class name already exists.
    pub fn add_font(&mut self, font: FontRecord) -> Result<()> {
        if self.fonts.iter().any(|f| f.class_name == font.class_name) {
            anyhow::bail!("A font with class name '{}' already exists", font.class_name);
        }
        self.fonts.push(font);
        Ok(())
    }

    /// Adds a typography token.
    pub fn add_typography(&mut self, record: TypographyRecord) {
        self.typography.push(record);
    }

    /// All colors tagged with `category`, in display order.
    #[must_use]
    pub fn colors_in_category(&self, category: &str) -> Vec<&ColorRecord> {
        self.colors
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// All fonts tagged with `category`, in display order.
    #[must_use]
    pub fn fonts_in_category(&self, category: &str) -> Vec<&FontRecord> {
        self.fonts
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    /// Checks the whole guide against its invariants, collecting every
    /// violation instead of stopping at the first.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        self.validate_colors(&mut report);
        self.validate_fonts(&mut report);
        self.validate_typography(&mut report);

        report
    }

    fn validate_colors(&self, report: &mut ValidationReport) {
        for (index, color) in self.colors.iter().enumerate() {
            if color.name.trim().is_empty() {
                report.error(GuideSection::Colors, format!("Color at index {index} has an empty name"));
            }

            if self.colors[..index].iter().any(|c| c.name == color.name) {
                report.error(
                    GuideSection::Colors,
                    format!("Duplicate color name '{}'", color.name),
                );
            }

            match RgbColor::from_hex(&color.hex) {
                Err(e) => {
                    report.error(GuideSection::Colors, format!("Color '{}': {e}", color.name));
                }
                Ok(parsed) => {
                    // Derived fields must agree with the hex value
                    if color.rgb != parsed.rgb_string() {
                        report.error(
                            GuideSection::Colors,
                            format!(
                                "Color '{}': rgb string '{}' does not match {}",
                                color.name, color.rgb, color.hex
                            ),
                        );
                    }
                    if color.text_color != accessibility::preferred_text_color(parsed) {
                        report.error(
                            GuideSection::Colors,
                            format!(
                                "Color '{}': text color {} is not the preferred choice for {}",
                                color.name, color.text_color, color.hex
                            ),
                        );
                    }
                }
            }

            if color.category.trim().is_empty() {
                report.warning(
                    GuideSection::Colors,
                    format!("Color '{}' has no category", color.name),
                );
            }
        }
    }

    fn validate_fonts(&self, report: &mut ValidationReport) {
        for (index, font) in self.fonts.iter().enumerate() {
            if font.name.trim().is_empty() {
                report.error(GuideSection::Fonts, format!("Font at index {index} has an empty name"));
            }

            if self.fonts[..index]
                .iter()
                .any(|f| f.class_name == font.class_name)
            {
                report.error(
                    GuideSection::Fonts,
                    format!("Duplicate font class name '{}'", font.class_name),
                );
            }

            if FontRecord::new(
                font.name.clone(),
                font.class_name.clone(),
                font.variable_weight,
                font.weights.clone(),
            )
            .is_err()
            {
                report.error(
                    GuideSection::Fonts,
                    format!("Font '{}' fails record validation", font.name),
                );
            }

            if font.preview.trim().is_empty() {
                report.warning(
                    GuideSection::Fonts,
                    format!("Font '{}' has an empty preview sentence", font.name),
                );
            }
        }
    }

    fn validate_typography(&self, report: &mut ValidationReport) {
        for (index, record) in self.typography.iter().enumerate() {
            if record.text.trim().is_empty() {
                report.error(
                    GuideSection::Typography,
                    format!("Typography token '{}' has empty sample text", record.class_name),
                );
            }

            if self.typography[..index]
                .iter()
                .any(|t| t.class_name == record.class_name)
            {
                report.warning(
                    GuideSection::Typography,
                    format!("Duplicate typography class name '{}'", record.class_name),
                );
            }
        }
    }
}

impl Default for StyleGuide {
    fn default() -> Self {
        Self::new(GuideMetadata::default())
    }
}

/// Which part of a guide a validation issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideSection {
    /// Color swatches
    Colors,
    /// Font families
    Fonts,
    /// Typography tokens
    Typography,
}

impl fmt::Display for GuideSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Colors => "colors",
            Self::Fonts => "fonts",
            Self::Typography => "typography",
        };
        write!(f, "{s}")
    }
}

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The guide is unusable until fixed
    Error,
    /// Worth fixing, but the guide still works
    Warning,
}

/// One validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Guide section the issue was found in
    pub section: GuideSection,
    /// Whether the issue invalidates the guide
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

/// All findings from a [`StyleGuide::validate`] pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Findings in discovery order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no error-severity issue was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    /// Error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
    }

    /// Warning-severity findings.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }

    fn error(&mut self, section: GuideSection, message: String) {
        self.issues.push(ValidationIssue {
            section,
            severity: Severity::Error,
            message,
        });
    }

    fn warning(&mut self, section: GuideSection, message: String) {
        self.issues.push(ValidationIssue {
            section,
            severity: Severity::Warning,
            message,
        });
    }
}

// ---------------------------------------------------------------------------
// Document form
// ---------------------------------------------------------------------------

/// The serde mirror of a style guide document on disk.
///
/// Documents only need to store authored data; derived fields (`rgb`,
/// `textColor`) present in a document are ignored and recomputed, so they can
/// never drift from the hex value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideDocument {
    /// Guide metadata (optional, defaults applied)
    #[serde(default)]
    pub metadata: GuideMetadata,
    /// Color entries
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
    /// Font entries
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
    /// Typography entries
    #[serde(default, alias = "typographyExamples")]
    pub typography: Vec<TypographyEntry>,
}

/// Authored form of a color record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    /// Display name
    pub name: String,
    /// `#RRGGBB` value
    pub hex: String,
    /// Editable flag, defaults to true
    #[serde(default)]
    pub editable: Option<bool>,
    /// Category tag
    #[serde(default)]
    pub category: Option<String>,
    /// Usage tags
    #[serde(default)]
    pub usage: Vec<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// Authored form of a font record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontEntry {
    /// Display name
    pub name: String,
    /// CSS class identifier
    pub class_name: String,
    /// Preview sentence (a pangram is used when omitted)
    #[serde(default)]
    pub preview: Option<String>,
    /// Variable-weight flag
    #[serde(default)]
    pub variable_weight: bool,
    /// Available weights
    pub weights: Vec<u16>,
    /// Category tag
    #[serde(default)]
    pub category: Option<String>,
    /// Usage tags
    #[serde(default)]
    pub usage: Vec<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// Authored form of a typography record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyEntry {
    /// Semantic heading level
    pub tag: HeadingTag,
    /// Style token class
    pub class_name: String,
    /// Sample text
    pub text: String,
    /// Editable flag, defaults to true
    #[serde(default)]
    pub editable: Option<bool>,
    /// Usage note
    #[serde(default)]
    pub usage: Option<String>,
}

impl GuideDocument {
    /// Checks every entry in the document, collecting all rule violations
    /// instead of stopping at the first bad record.
    ///
    /// Rules are the record constructors themselves: each entry is test-built
    /// and failures become error findings, so a document whose report has no
    /// errors is guaranteed to convert via [`GuideDocument::into_guide`].
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (index, entry) in self.colors.iter().enumerate() {
            if let Err(e) = ColorRecord::new(&entry.name, &entry.hex) {
                report.error(
                    GuideSection::Colors,
                    format!("Color '{}': {}", entry.name, e.root_cause()),
                );
            }

            if self.colors[..index].iter().any(|c| c.name == entry.name) {
                report.error(
                    GuideSection::Colors,
                    format!("Duplicate color name '{}'", entry.name),
                );
            }

            if entry.category.as_deref().is_some_and(|c| c.trim().is_empty()) {
                report.warning(
                    GuideSection::Colors,
                    format!("Color '{}' has a blank category", entry.name),
                );
            }
        }

        for (index, entry) in self.fonts.iter().enumerate() {
            let built = FontRecord::new(
                &entry.name,
                &entry.class_name,
                entry.variable_weight,
                entry.weights.clone(),
            )
            .and_then(|font| match &entry.preview {
                Some(preview) => font.with_preview(preview.clone()),
                None => Ok(font),
            });
            if let Err(e) = built {
                report.error(
                    GuideSection::Fonts,
                    format!("Font '{}': {}", entry.name, e.root_cause()),
                );
            }

            if self.fonts[..index]
                .iter()
                .any(|f| f.class_name == entry.class_name)
            {
                report.error(
                    GuideSection::Fonts,
                    format!("Duplicate font class name '{}'", entry.class_name),
                );
            }
        }

        for (index, entry) in self.typography.iter().enumerate() {
            if let Err(e) = TypographyRecord::new(entry.tag, &entry.class_name, &entry.text) {
                report.error(
                    GuideSection::Typography,
                    format!("Typography token '{}': {}", entry.class_name, e.root_cause()),
                );
            }

            if self.typography[..index]
                .iter()
                .any(|t| t.class_name == entry.class_name)
            {
                report.warning(
                    GuideSection::Typography,
                    format!("Duplicate typography class name '{}'", entry.class_name),
                );
            }
        }

        report
    }

    /// Builds a validated [`StyleGuide`] from this document.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending record when any entry fails
    /// construction (bad hex, bad class name, bad weights, duplicates).
    pub fn into_guide(self) -> Result<StyleGuide> {
        let mut guide = StyleGuide::new(self.metadata);

        for entry in self.colors {
            let mut color = ColorRecord::new(&entry.name, &entry.hex)
                .with_context(|| format!("Invalid color '{}'", entry.name))?;
            if let Some(category) = entry.category {
                color = color.with_category(category);
            }
            if !entry.usage.is_empty() {
                color = color.with_usage(entry.usage);
            }
            if let Some(description) = entry.description {
                color = color.with_description(description);
            }
            if entry.editable == Some(false) {
                color = color.locked();
            }
            guide.add_color(color)?;
        }

        for entry in self.fonts {
            let mut font = FontRecord::new(
                &entry.name,
                &entry.class_name,
                entry.variable_weight,
                entry.weights,
            )
            .with_context(|| format!("Invalid font '{}'", entry.name))?;
            if let Some(preview) = entry.preview {
                font = font
                    .with_preview(preview)
                    .with_context(|| format!("Invalid font '{}'", entry.name))?;
            }
            if let Some(category) = entry.category {
                font = font.with_category(category);
            }
            if !entry.usage.is_empty() {
                font = font.with_usage(entry.usage);
            }
            if let Some(description) = entry.description {
                font = font.with_description(description);
            }
            guide.add_font(font)?;
        }

        for entry in self.typography {
            let mut record = TypographyRecord::new(entry.tag, &entry.class_name, &entry.text)
                .with_context(|| format!("Invalid typography token '{}'", entry.class_name))?;
            if let Some(usage) = entry.usage {
                record = record.with_usage(usage);
            }
            if entry.editable == Some(false) {
                record = record.locked();
            }
            guide.add_typography(record);
        }

        Ok(guide)
    }
}
