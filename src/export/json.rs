//! Pretty-printed JSON exports with a metadata header.
//!
//! Output maps are keyed by slug and keep input order (serde_json is built
//! with `preserve_order`), so a given palette always serializes to the same
//! bytes for a given timestamp.

use crate::accessibility;
use crate::export::slug::slugify;
use crate::models::{ColorRecord, FontRecord, RgbColor};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

/// Contrast values are stored with two decimals; full float precision is
/// noise for a design token file.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn iso_timestamp(generated: DateTime<Utc>) -> String {
    generated.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders the color palette as a pretty JSON document.
///
/// The document has a `metadata` header (name, version, generation
/// timestamp, count) and a `colors` object keyed by slug in input order.
/// Each entry carries the display name, hex/rgb/hsl forms, and an
/// `accessibility` block with both contrast ratios and the recommended
/// text color.
///
/// The timestamp is an explicit argument so output is reproducible; pass
/// `Utc::now()` for live exports.
///
/// # Errors
///
/// Serialization cannot fail for well-formed records; the `Result` only
/// surfaces serde_json internals.
pub fn color_json(colors: &[ColorRecord], generated: DateTime<Utc>) -> serde_json::Result<String> {
    let mut entries = Map::new();

    for color in colors {
        let rgb = color.color();
        entries.insert(
            slugify(&color.name),
            json!({
                "name": color.name,
                "hex": color.hex,
                "rgb": rgb.rgb_string(),
                "hsl": rgb.to_hsl().to_string(),
                "accessibility": {
                    "contrastWithWhite": round2(accessibility::contrast_ratio(rgb, RgbColor::WHITE)),
                    "contrastWithBlack": round2(accessibility::contrast_ratio(rgb, RgbColor::BLACK)),
                    "recommendedTextColor": color.text_color,
                },
            }),
        );
    }

    let document = json!({
        "metadata": {
            "name": "Style Guide Colors",
            "version": "1.0.0",
            "generated": iso_timestamp(generated),
            "totalColors": colors.len(),
        },
        "colors": Value::Object(entries),
    });

    serde_json::to_string_pretty(&document)
}

/// Renders the font set as a pretty JSON document, mirroring
/// [`color_json`]'s shape with a `fonts` object keyed by slug.
///
/// # Errors
///
/// Serialization cannot fail for well-formed records; the `Result` only
/// surfaces serde_json internals.
pub fn font_json(fonts: &[FontRecord], generated: DateTime<Utc>) -> serde_json::Result<String> {
    let mut entries = Map::new();

    for font in fonts {
        entries.insert(
            slugify(&font.name),
            json!({
                "name": font.name,
                "className": font.class_name,
                "family": font.family(),
                "weights": font.weights,
                "preview": font.preview,
                "googleFontsUrl": specimen_url(&font.name),
            }),
        );
    }

    let document = json!({
        "metadata": {
            "name": "Style Guide Fonts",
            "version": "1.0.0",
            "generated": iso_timestamp(generated),
            "totalFonts": fonts.len(),
        },
        "fonts": Value::Object(entries),
    });

    serde_json::to_string_pretty(&document)
}

/// Google Fonts specimen page for a font name.
fn specimen_url(name: &str) -> String {
    format!(
        "https://fonts.google.com/specimen/{}",
        name.replace(' ', "+")
    )
}
