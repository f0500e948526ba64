//! Color swatch records with derived display attributes.

use crate::accessibility::{self, TextColor};
use crate::models::{HexFormatError, RgbColor};
use anyhow::Result;
use serde::Serialize;

/// A named color swatch in a style guide.
///
/// The `rgb` string and `text_color` are derived from `hex` when the record
/// is constructed, so the three stay consistent by construction. Edits go
/// through [`ColorRecord::recolored`] / [`ColorRecord::renamed`], which
/// produce a fresh record to replace the old one in its owning
/// [`StyleGuide`](crate::models::StyleGuide).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRecord {
    /// Display name, unique within a guide (e.g., "Autumn Blaze")
    pub name: String,
    /// Uppercase `#RRGGBB` value
    pub hex: String,
    /// Derived `rgb(r, g, b)` display string
    pub rgb: String,
    /// Derived text color with the better contrast on this swatch
    pub text_color: TextColor,
    /// Whether the record may be edited or removed
    pub editable: bool,
    /// Grouping tag (e.g., "primary", "neutral", "accent")
    pub category: String,
    /// Where the color is meant to be used
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub usage: Vec<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ColorRecord {
    /// Creates a color record from a display name and a `#RRGGBB` hex value.
    ///
    /// The hex string is validated strictly and normalized to uppercase;
    /// the rgb string and preferred text color are derived from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::ColorRecord;
    ///
    /// let color = ColorRecord::new("Autumn Blaze", "#f4991a").unwrap();
    /// assert_eq!(color.hex, "#F4991A");
    /// assert_eq!(color.rgb, "rgb(244, 153, 26)");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the hex value is malformed.
    pub fn new(name: impl Into<String>, hex: &str) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        let color = RgbColor::from_hex(hex)?;
        Ok(Self {
            name,
            hex: color.to_hex(),
            rgb: color.rgb_string(),
            text_color: accessibility::preferred_text_color(color),
            editable: true,
            category: "uncategorized".to_string(),
            usage: Vec::new(),
            description: None,
        })
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

    /// Marks the record as fixed (not editable or removable).
    #[must_use]
    pub fn locked(mut self) -> Self {
        self.editable = false;
        self
    }

    /// The parsed channel form of `hex`.
    ///
    /// `hex` is validated at construction, so parsing cannot fail for
    /// records built through [`ColorRecord::new`].
    #[must_use]
    pub fn color(&self) -> RgbColor {
        RgbColor::from_hex(&self.hex).unwrap_or_default()
    }

    /// Returns a copy of this record recolored to `hex`, with the rgb
    /// string and text color rederived.
    ///
    /// # Errors
    ///
    /// Returns [`HexFormatError`] if the new hex value is malformed.
    pub fn recolored(&self, hex: &str) -> Result<Self, HexFormatError> {
        let color = RgbColor::from_hex(hex)?;
        Ok(Self {
            hex: color.to_hex(),
            rgb: color.rgb_string(),
            text_color: accessibility::preferred_text_color(color),
            ..self.clone()
        })
    }

    /// Returns a copy of this record renamed to `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the new name is blank.
    pub fn renamed(&self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(Self {
            name,
            ..self.clone()
        })
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("Color name cannot be empty");
        }
        Ok(())
    }
}
