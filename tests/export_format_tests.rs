//! Byte-level contract tests for the export generators.
//!
//! These pin the exact output shapes that downstream tooling depends on;
//! if one of these changes, consumers of exported files break.

use chrono::{TimeZone, Utc};
use swatchbook::export;
use swatchbook::models::{ColorRecord, StyleGuide};

#[test]
fn test_css_variable_block_is_byte_exact() {
    let colors = vec![
        ColorRecord::new("Autumn Blaze", "#F4991A").unwrap(),
        ColorRecord::new("Hunter's Green", "#344F1F").unwrap(),
    ];

    let expected = "\
:root {
  --color-autumn-blaze: #F4991A;
  --color-autumn-blaze-rgb: 244, 153, 26;
  --color-hunters-green: #344F1F;
  --color-hunters-green-rgb: 52, 79, 31;
}
";
    assert_eq!(export::css_variables(&colors), expected);
}

#[test]
fn test_builtin_guide_css_variables() {
    let guide = StyleGuide::builtin().unwrap();
    let css = export::css_variables(&guide.colors);

    let expected = "\
:root {
  --color-parchment: #F9F5F0;
  --color-parchment-rgb: 249, 245, 240;
  --color-buttermilk: #F2EAD3;
  --color-buttermilk-rgb: 242, 234, 211;
  --color-autumn-blaze: #F4991A;
  --color-autumn-blaze-rgb: 244, 153, 26;
  --color-hunters-green: #344F1F;
  --color-hunters-green-rgb: 52, 79, 31;
}
";
    assert_eq!(css, expected);
}

#[test]
fn test_json_export_key_order_follows_declaration() {
    let colors = vec![ColorRecord::new("Ink", "#101010").unwrap()];
    let generated = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let json = export::color_json(&colors, generated).unwrap();

    // Top-level: metadata before colors; metadata keys in declared order;
    // entry keys in declared order. Byte positions make ordering observable.
    let positions: Vec<usize> = [
        "\"metadata\"",
        "\"name\": \"Style Guide Colors\"",
        "\"version\"",
        "\"generated\"",
        "\"totalColors\"",
        "\"colors\"",
        "\"ink\"",
        "\"hex\"",
        "\"rgb\"",
        "\"hsl\"",
        "\"accessibility\"",
        "\"contrastWithWhite\"",
        "\"contrastWithBlack\"",
        "\"recommendedTextColor\"",
    ]
    .iter()
    .map(|needle| json.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();

    for window in positions.windows(2) {
        assert!(window[0] < window[1], "Key order drifted:\n{json}");
    }
}

#[test]
fn test_json_export_is_stable_across_runs() {
    let guide = StyleGuide::builtin().unwrap();
    let generated = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

    let first = export::color_json(&guide.colors, generated).unwrap();
    let second = export::color_json(&guide.colors, generated).unwrap();
    assert_eq!(first, second);

    let fonts_first = export::font_json(&guide.fonts, generated).unwrap();
    let fonts_second = export::font_json(&guide.fonts, generated).unwrap();
    assert_eq!(fonts_first, fonts_second);
}

#[test]
fn test_scss_and_js_cover_every_builtin_record() {
    let guide = StyleGuide::builtin().unwrap();

    let scss = export::color_scss(&guide.colors);
    let js = export::color_js(&guide.colors);
    for color in &guide.colors {
        let slug = export::slugify(&color.name);
        assert!(scss.contains(&format!("$color-{slug}: {};", color.hex)));
        assert!(js.contains(&export::const_case(&color.name)));
    }

    let font_scss = export::font_scss(&guide.fonts);
    let font_js = export::font_js(&guide.fonts);
    for font in &guide.fonts {
        let slug = export::slugify(&font.name);
        assert!(font_scss.contains(&format!("$font-{slug}")));
        assert!(font_js.contains(&format!("className: '{}'", font.class_name)));
    }
}
