//! End-to-end tests for the `swatchbook validate` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the swatchbook binary
fn swatchbook_bin() -> &'static str {
    env!("CARGO_BIN_EXE_swatchbook")
}

#[test]
fn test_validate_clean_guide_passes() {
    let guide = test_guide_basic();
    let (guide_path, guide_temp) = create_temp_guide_file(&guide);

    let output = Command::new(swatchbook_bin())
        .args(["validate", "--guide", guide_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Validation passed"));
    assert!(stdout.contains("Colors:     passed"));
}

#[test]
fn test_validate_broken_guide_fails() {
    let (guide_path, guide_temp) = create_raw_guide_file("broken.json", INVALID_GUIDE_JSON);

    let output = Command::new(swatchbook_bin())
        .args(["validate", "--guide", guide_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✗ Validation failed"));
    assert!(stdout.contains("Duplicate color name 'Dup'"));
    assert!(stdout.contains("invalid hex color"));
}

#[test]
fn test_validate_json_response() {
    let (guide_path, guide_temp) = create_raw_guide_file("broken.json", INVALID_GUIDE_JSON);

    let output = Command::new(swatchbook_bin())
        .args([
            "validate",
            "--guide",
            guide_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Response should be valid JSON");

    assert_eq!(parsed["valid"], false);
    assert_eq!(parsed["checks"]["colors"], "failed");
    assert_eq!(parsed["checks"]["fonts"], "passed");
    assert!(parsed["messages"]
        .as_array()
        .unwrap()
        .iter()
        .any(|m| m["severity"] == "error" && m["section"] == "colors"));
}

#[test]
fn test_validate_warnings_pass_unless_strict() {
    let (guide_path, guide_temp) = create_raw_guide_file("warn.json", WARNING_GUIDE_JSON);

    let output = Command::new(swatchbook_bin())
        .args(["validate", "--guide", guide_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "Warnings alone should not fail. stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );

    let output = Command::new(swatchbook_bin())
        .args([
            "validate",
            "--guide",
            guide_path.to_str().unwrap(),
            "--strict",
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1), "Strict mode should fail on warnings");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("strict"));
}

#[test]
fn test_validate_missing_file_is_io_error() {
    let output = Command::new(swatchbook_bin())
        .args(["validate", "--guide", "/nonexistent/guide.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_validate_unparseable_document_is_io_error() {
    let (guide_path, guide_temp) = create_raw_guide_file("bad.json", "{ not json");

    let output = Command::new(swatchbook_bin())
        .args(["validate", "--guide", guide_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
