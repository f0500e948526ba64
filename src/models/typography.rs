//! Typography token records.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic heading level a typography token renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
}

impl HeadingTag {
    /// The HTML tag name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typography example in a style guide (one heading scale step).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyRecord {
    /// Semantic heading level
    pub tag: HeadingTag,
    /// Style token class in kebab-case (e.g., "display-large")
    pub class_name: String,
    /// Sample text shown for the token
    pub text: String,
    /// Whether the sample text may be edited
    pub editable: bool,
    /// Where the token is meant to be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl TypographyRecord {
    /// Creates a typography record with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the class name is not kebab-case or the sample
    /// text is blank.
    pub fn new(tag: HeadingTag, class_name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let class_name = class_name.into();
        let text = text.into();

        Self::validate_class_name(&class_name)?;
        if text.trim().is_empty() {
            anyhow::bail!("Typography sample text cannot be empty");
        }

        Ok(Self {
            tag,
            class_name,
            text,
            editable: true,
            usage: None,
        })
    }

    /// Sets the usage note.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Marks the record as fixed (sample text not editable).
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Returns a copy of this record with new sample text.
    ///
    /// # Errors
    ///
    /// Returns an error if the new text is blank.
    pub fn retexted(&self, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            anyhow::bail!("Typography sample text cannot be empty");
        }
        Ok(Self {
            text,
            ..self.clone()
        })
    }

    /// Validates class name format (kebab-case).
    fn validate_class_name(class_name: &str) -> Result<()> {
        if class_name.is_empty() {
            anyhow::bail!("Typography class name cannot be empty");
        }

        if !class_name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Typography class name '{class_name}' must be kebab-case (lowercase, hyphens, and digits only)"
            );
        }

        if class_name.starts_with('-') || class_name.ends_with('-') {
            anyhow::bail!(
                "Typography class name '{class_name}' cannot start or end with a hyphen"
            );
        }

        Ok(())
    }
}
