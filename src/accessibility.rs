//! WCAG accessibility scoring for colors.
//!
//! Relative luminance and contrast ratio follow the WCAG 2.1 definitions;
//! ratings classify the best achievable text contrast of a swatch against
//! pure white and pure black backgrounds.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Linearizes one sRGB channel (gamma expansion).
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: RgbColor) -> f64 {
    0.2126f64.mul_add(
        linearize(color.r),
        0.7152f64.mul_add(linearize(color.g), 0.0722 * linearize(color.b)),
    )
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance level for text on a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingLevel {
    /// Best contrast >= 7.0:1
    #[serde(rename = "AAA")]
    Aaa,
    /// Best contrast >= 4.5:1
    #[serde(rename = "AA")]
    Aa,
    /// Best contrast below 4.5:1
    #[serde(rename = "FAIL")]
    Fail,
}

impl RatingLevel {
    /// Short human label shown next to the level.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Aaa => "Excellent",
            Self::Aa => "Good",
            Self::Fail => "Poor",
        }
    }
}

impl fmt::Display for RatingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "FAIL",
        };
        write!(f, "{s}")
    }
}

/// Accessibility rating of a swatch: the conformance level together with the
/// contrast ratio that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rating {
    /// Conformance level for the best text color choice
    pub level: RatingLevel,
    /// The larger of the contrast ratios against white and black
    pub best_contrast: f64,
}

/// Rates a swatch by the best text contrast it can offer.
///
/// Contrast is computed against both pure white and pure black; the larger
/// of the two is classified with inclusive thresholds: >= 7.0 is AAA,
/// >= 4.5 is AA, anything lower fails.
#[must_use]
pub fn accessibility_rating(color: RgbColor) -> Rating {
    let with_white = contrast_ratio(color, RgbColor::WHITE);
    let with_black = contrast_ratio(color, RgbColor::BLACK);
    let best_contrast = with_white.max(with_black);

    let level = if best_contrast >= 7.0 {
        RatingLevel::Aaa
    } else if best_contrast >= 4.5 {
        RatingLevel::Aa
    } else {
        RatingLevel::Fail
    };

    Rating {
        level,
        best_contrast,
    }
}

/// Text color choice for display on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColor {
    /// `#000`
    #[serde(rename = "#000")]
    Black,
    /// `#fff`
    #[serde(rename = "#fff")]
    White,
}

impl TextColor {
    /// CSS short-hex form of the choice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "#000",
            Self::White => "#fff",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Picks the text color (black or white) with the higher contrast on `color`.
///
/// Black wins only when its contrast is strictly greater than white's; on a
/// tie the choice falls to white. The comparison is deliberately asymmetric
/// so the result is stable for swatches where both choices score equally.
#[must_use]
pub fn preferred_text_color(color: RgbColor) -> TextColor {
    let with_black = contrast_ratio(color, RgbColor::BLACK);
    let with_white = contrast_ratio(color, RgbColor::WHITE);
    if with_black > with_white {
        TextColor::Black
    } else {
        TextColor::White
    }
}
