//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use swatchbook::models::{
    ColorRecord, FontRecord, GuideMetadata, HeadingTag, StyleGuide, TypographyRecord,
};
use swatchbook::services::GuideService;
use tempfile::TempDir;

/// Creates a small deterministic style guide.
///
/// Three colors (one locked), two fonts, and two typography tokens --
/// enough to exercise every export format and search target.
pub fn test_guide_basic() -> StyleGuide {
    let mut guide = StyleGuide::new(GuideMetadata {
        name: "Test Guide".to_string(),
        version: "1.0.0".to_string(),
        description: Some("E2E test guide".to_string()),
        author: Some("Test Suite".to_string()),
    });

    guide
        .add_color(
            ColorRecord::new("Autumn Blaze", "#F4991A")
                .unwrap()
                .with_category("accent")
                .with_usage(vec!["buttons".to_string(), "links".to_string()]),
        )
        .unwrap();
    guide
        .add_color(
            ColorRecord::new("Hunter's Green", "#344F1F")
                .unwrap()
                .with_category("primary"),
        )
        .unwrap();
    guide
        .add_color(
            ColorRecord::new("Parchment", "#F9F5F0")
                .unwrap()
                .with_category("neutral")
                .locked(),
        )
        .unwrap();

    guide
        .add_font(
            FontRecord::new("Raleway", "raleway", true, vec![100, 400, 700, 900])
                .unwrap()
                .with_category("sans-serif"),
        )
        .unwrap();
    guide
        .add_font(
            FontRecord::new("Merriweather", "merriweather", false, vec![300, 400, 700])
                .unwrap()
                .with_category("serif"),
        )
        .unwrap();

    guide.add_typography(
        TypographyRecord::new(HeadingTag::H1, "display-large", "Display Large")
            .unwrap()
            .with_usage("Hero headlines"),
    );
    guide.add_typography(
        TypographyRecord::new(HeadingTag::H2, "display-medium", "Display Medium").unwrap(),
    );

    guide
}

/// Writes a guide to a temp JSON file.
///
/// Returns the file path and the TempDir guard (keep it alive for the
/// duration of the test).
pub fn create_temp_guide_file(guide: &StyleGuide) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("guide.json");
    GuideService::save(guide, &path).expect("Failed to save guide");
    (path, dir)
}

/// Writes raw document content to a temp file with the given name.
pub fn create_raw_guide_file(filename: &str, content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(filename);
    fs::write(&path, content).expect("Failed to write guide file");
    (path, dir)
}

/// A JSON document with rule violations: a duplicate color name and a
/// malformed hex value.
pub const INVALID_GUIDE_JSON: &str = r##"{
  "metadata": { "name": "Broken Guide" },
  "colors": [
    { "name": "Dup", "hex": "#101010" },
    { "name": "Dup", "hex": "#202020" },
    { "name": "Broken", "hex": "nope" }
  ]
}"##;

/// A JSON document that is valid but carries a warning (duplicate
/// typography class names).
pub const WARNING_GUIDE_JSON: &str = r##"{
  "metadata": { "name": "Warning Guide" },
  "colors": [
    { "name": "Ink", "hex": "#101010" }
  ],
  "typography": [
    { "tag": "h1", "className": "display-large", "text": "A" },
    { "tag": "h2", "className": "display-large", "text": "B" }
  ]
}"##;
