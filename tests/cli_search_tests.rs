//! End-to-end tests for the `swatchbook search` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the swatchbook binary
fn swatchbook_bin() -> &'static str {
    env!("CARGO_BIN_EXE_swatchbook")
}

#[test]
fn test_search_colors_by_name_substring() {
    let guide = test_guide_basic();
    let (guide_path, guide_temp) = create_temp_guide_file(&guide);

    let output = Command::new(swatchbook_bin())
        .args([
            "search",
            "blaze",
            "--guide",
            guide_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Autumn Blaze"));
    assert!(stdout.contains("1 of 3 colors matched"));
    assert!(!stdout.contains("Parchment"));
}

#[test]
fn test_search_is_case_insensitive() {
    let guide = test_guide_basic();
    let (guide_path, guide_temp) = create_temp_guide_file(&guide);

    let lower = Command::new(swatchbook_bin())
        .args(["search", "blaze", "--guide", guide_path.to_str().unwrap()])
        .output()
        .unwrap();
    let upper = Command::new(swatchbook_bin())
        .args(["search", "BLAZE", "--guide", guide_path.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(lower.stdout, upper.stdout);
}

#[test]
fn test_search_empty_term_matches_everything() {
    let guide = test_guide_basic();
    let (guide_path, guide_temp) = create_temp_guide_file(&guide);

    let output = Command::new(swatchbook_bin())
        .args(["search", "", "--guide", guide_path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 3);
    // Guide order is preserved
    assert_eq!(records[0]["name"], "Autumn Blaze");
    assert_eq!(records[2]["name"], "Parchment");
}

#[test]
fn test_search_restricted_to_field() {
    let guide = test_guide_basic();
    let (guide_path, guide_temp) = create_temp_guide_file(&guide);

    // "f4" hits Autumn Blaze's hex, but no color name
    let output = Command::new(swatchbook_bin())
        .args([
            "search",
            "f4",
            "--guide",
            guide_path.to_str().unwrap(),
            "--field",
            "name",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No colors match 'f4'"));
}

#[test]
fn test_search_unknown_field_is_usage_error() {
    let guide = test_guide_basic();
    let (guide_path, guide_temp) = create_temp_guide_file(&guide);

    let output = Command::new(swatchbook_bin())
        .args([
            "search",
            "x",
            "--guide",
            guide_path.to_str().unwrap(),
            "--field",
            "bogus",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown field 'bogus'"));
}

#[test]
fn test_search_fonts_target() {
    let guide = test_guide_basic();
    let (guide_path, guide_temp) = create_temp_guide_file(&guide);

    let output = Command::new(swatchbook_bin())
        .args([
            "search",
            "serif",
            "--guide",
            guide_path.to_str().unwrap(),
            "--target",
            "fonts",
            "--field",
            "category",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Both "sans-serif" and "serif" categories contain the substring
    assert!(stdout.contains("Raleway"));
    assert!(stdout.contains("Merriweather"));
    assert!(stdout.contains("2 of 2 fonts matched"));
}

#[test]
fn test_search_typography_target() {
    let guide = test_guide_basic();
    let (guide_path, guide_temp) = create_temp_guide_file(&guide);

    let output = Command::new(swatchbook_bin())
        .args([
            "search",
            "medium",
            "--guide",
            guide_path.to_str().unwrap(),
            "--target",
            "typography",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("display-medium"));
    assert!(!stdout.contains("display-large"));
}
