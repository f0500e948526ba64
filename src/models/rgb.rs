//! RGB and HSL color values with strict hex parsing.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a string is not a valid `#RRGGBB` hex color.
///
/// The accepted form is exactly a leading `#` followed by six hex digits,
/// case-insensitive. Shorthand (`#FFF`), bare digits (`RRGGBB`), and
/// surrounding whitespace are all rejected so that malformed input is
/// surfaced instead of silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{0}': expected the form #RRGGBB")]
pub struct HexFormatError(pub String);

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white (#FFFFFF).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a `#RRGGBB` hex string.
    ///
    /// The leading `#` is required and exactly six hex digits must follow;
    /// parsing is case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// assert!(RgbColor::from_hex("FF0000").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HexFormatError`] if the string does not match `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, HexFormatError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| HexFormatError(hex.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| HexFormatError(hex.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats the color as a CSS `rgb(r, g, b)` functional string.
    #[must_use]
    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts the color to HSL (Hue, Saturation, Lightness).
    ///
    /// Uses the standard piecewise formula over normalized channels: when
    /// max == min the color is achromatic (hue and saturation are zero);
    /// otherwise saturation depends on which side of 50% lightness the color
    /// sits, and hue is selected by the dominant channel in 60-degree
    /// segments. Components are rounded to the nearest integer, with hue
    /// normalized into [0,360).
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::{Hsl, RgbColor};
    ///
    /// let red = RgbColor::new(255, 0, 0);
    /// assert_eq!(red.to_hsl(), Hsl { h: 0, s: 100, l: 50 });
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic, hue is undefined
            return Hsl {
                h: 0,
                s: 0,
                l: (l * 100.0).round() as u8,
            };
        }

        let delta = max - min;
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        // Rounding can land exactly on 360; reduce back into range
        Hsl {
            h: ((h * 60.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::WHITE
    }
}

/// HSL color value with integer components.
///
/// Hue is in degrees [0,359], saturation and lightness are percentages
/// [0,100]. This is the display form used in exports (`hsl(h, s%, l%)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0-359)
    pub h: u16,
    /// Saturation percent (0-100)
    pub s: u8,
    /// Lightness percent (0-100)
    pub l: u8,
}

impl Hsl {
    /// Converts back to RGB.
    ///
    /// Inverse of [`RgbColor::to_hsl`] up to integer rounding: a round trip
    /// through HSL may shift each channel by a couple of values.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_rgb(&self) -> RgbColor {
        let h = f64::from(self.h.min(359));
        let s = f64::from(self.s.min(100)) / 100.0;
        let l = f64::from(self.l.min(100)) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match self.h.min(359) {
            0..=59 => (c, x, 0.0),
            60..=119 => (x, c, 0.0),
            120..=179 => (0.0, c, x),
            180..=239 => (0.0, x, c),
            240..=299 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        RgbColor::new(
            ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}
