//! Font records for the font showcase dataset.

use anyhow::Result;
use serde::Serialize;

/// A font family in a style guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontRecord {
    /// Display name (e.g., "Raleway")
    pub name: String,
    /// CSS class identifier in kebab-case (e.g., "raleway")
    pub class_name: String,
    /// Sample sentence rendered in previews
    pub preview: String,
    /// Whether the font ships as a variable-weight face
    pub variable_weight: bool,
    /// Available weights, ascending, each in [100,900]
    pub weights: Vec<u16>,
    /// Grouping tag (e.g., "sans-serif", "serif")
    pub category: String,
    /// Where the font is meant to be used
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub usage: Vec<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Default preview sentence when a document provides none.
pub const DEFAULT_PREVIEW: &str = "The quick brown fox jumps over the lazy dog.";

impl FontRecord {
    /// Creates a font record with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::FontRecord;
    ///
    /// let font = FontRecord::new(
    ///     "Raleway",
    ///     "raleway",
    ///     true,
    ///     vec![100, 400, 700, 900],
    /// ).unwrap();
    /// assert_eq!(font.family(), "'Raleway', sans-serif");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - name is empty
    /// - class name is empty or not kebab-case
    /// - weights are empty, out of [100,900], or not strictly ascending
    pub fn new(
        name: impl Into<String>,
        class_name: impl Into<String>,
        variable_weight: bool,
        weights: Vec<u16>,
    ) -> Result<Self> {
        let name = name.into();
        let class_name = class_name.into();

        if name.trim().is_empty() {
            anyhow::bail!("Font name cannot be empty");
        }
        Self::validate_class_name(&class_name)?;
        Self::validate_weights(&weights)?;

        Ok(Self {
            name,
            class_name,
            preview: DEFAULT_PREVIEW.to_string(),
            variable_weight,
            weights,
            category: "sans-serif".to_string(),
            usage: Vec::new(),
            description: None,
        })
    }

    /// Sets the preview sentence.
    ///
    /// # Errors
    ///
    /// Returns an error if the preview is blank.
    pub fn with_preview(mut self, preview: impl Into<String>) -> Result<Self> {
        let preview = preview.into();
        if preview.trim().is_empty() {
            anyhow::bail!("Font preview cannot be empty");
        }
        self.preview = preview;
        Ok(self)
    }

    /// Sets the category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the usage tags.
    #[must_use]
    pub fn with_usage(mut self, usage: Vec<String>) -> Self {
        self.usage = usage;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// CSS `font-family` value with a generic fallback.
    #[must_use]
    pub fn family(&self) -> String {
        format!("'{}', sans-serif", self.name)
    }

    /// Validates class name format (kebab-case).
    fn validate_class_name(class_name: &str) -> Result<()> {
        if class_name.is_empty() {
            anyhow::bail!("Font class name cannot be empty");
        }

        if !class_name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Font class name '{class_name}' must be kebab-case (lowercase, hyphens, and digits only)"
            );
        }

        if class_name.starts_with('-') || class_name.ends_with('-') {
            anyhow::bail!("Font class name '{class_name}' cannot start or end with a hyphen");
        }

        Ok(())
    }

    /// Validates the weight sequence: non-empty, in range, strictly ascending.
    fn validate_weights(weights: &[u16]) -> Result<()> {
        if weights.is_empty() {
            anyhow::bail!("Font must declare at least one weight");
        }

        for &weight in weights {
            if !(100..=900).contains(&weight) {
                anyhow::bail!("Font weight {weight} is outside the valid range 100-900");
            }
        }

        if weights.windows(2).any(|pair| pair[0] >= pair[1]) {
            anyhow::bail!("Font weights must be strictly ascending");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let font = FontRecord::new("Merriweather", "merriweather", false, vec![300, 400, 700, 900])
            .unwrap();
        assert_eq!(font.name, "Merriweather");
        assert_eq!(font.class_name, "merriweather");
        assert_eq!(font.preview, DEFAULT_PREVIEW);
        assert!(!font.variable_weight);
    }

    #[test]
    fn test_new_rejects_empty_name() {
        assert!(FontRecord::new("", "font", false, vec![400]).is_err());
    }

    #[test]
    fn test_class_name_validation() {
        assert!(FontRecord::new("Lato", "lato", false, vec![400]).is_ok());
        assert!(FontRecord::new("Lato", "lato-2", false, vec![400]).is_ok());
        assert!(FontRecord::new("Lato", "Lato", false, vec![400]).is_err()); // uppercase
        assert!(FontRecord::new("Lato", "la to", false, vec![400]).is_err()); // space
        assert!(FontRecord::new("Lato", "la_to", false, vec![400]).is_err()); // underscore
        assert!(FontRecord::new("Lato", "-lato", false, vec![400]).is_err()); // leading hyphen
        assert!(FontRecord::new("Lato", "lato-", false, vec![400]).is_err()); // trailing hyphen
        assert!(FontRecord::new("Lato", "", false, vec![400]).is_err());
    }

    #[test]
    fn test_weight_validation() {
        assert!(FontRecord::new("Lato", "lato", false, vec![]).is_err());
        assert!(FontRecord::new("Lato", "lato", false, vec![50]).is_err());
        assert!(FontRecord::new("Lato", "lato", false, vec![1000]).is_err());
        assert!(FontRecord::new("Lato", "lato", false, vec![400, 300]).is_err());
        assert!(FontRecord::new("Lato", "lato", false, vec![400, 400]).is_err());
        assert!(FontRecord::new("Lato", "lato", false, vec![100, 900]).is_ok());
    }

    #[test]
    fn test_preview_validation() {
        let font = FontRecord::new("Lato", "lato", false, vec![400]).unwrap();
        assert!(font.clone().with_preview("Sample text").is_ok());
        assert!(font.with_preview("  ").is_err());
    }

    #[test]
    fn test_family() {
        let font = FontRecord::new("Raleway", "raleway", true, vec![400]).unwrap();
        assert_eq!(font.family(), "'Raleway', sans-serif");
    }
}
