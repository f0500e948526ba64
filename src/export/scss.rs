//! SCSS generation: variables, maps, and mixins.

use crate::export::slug::slugify;
use crate::models::{ColorRecord, FontRecord};
use std::fmt::Write as _;

/// Renders SCSS color variables, a `$colors` map, and color mixins.
#[must_use]
pub fn color_scss(colors: &[ColorRecord]) -> String {
    let mut out = String::from("// Color Variables\n");

    for color in colors {
        let slug = slugify(&color.name);
        let rgb = color.color();
        let _ = writeln!(out, "$color-{slug}: {};", color.hex);
        let _ = writeln!(out, "$color-{slug}-rgb: {}, {}, {};", rgb.r, rgb.g, rgb.b);
    }

    out.push_str("\n// Color Map\n$colors: (\n");
    for (index, color) in colors.iter().enumerate() {
        let slug = slugify(&color.name);
        let separator = if index + 1 < colors.len() { "," } else { "" };
        let _ = writeln!(out, "  \"{slug}\": $color-{slug}{separator}");
    }
    out.push_str(");\n\n");

    out.push_str("// Color Mixins\n");
    out.push_str("@mixin text-color($color-name) {\n");
    out.push_str("  color: map-get($colors, $color-name);\n");
    out.push_str("}\n\n");
    out.push_str("@mixin background-color($color-name) {\n");
    out.push_str("  background-color: map-get($colors, $color-name);\n");
    out.push_str("}\n");

    out
}

/// Renders SCSS font variables, a `$fonts` map, and font mixins.
#[must_use]
pub fn font_scss(fonts: &[FontRecord]) -> String {
    let mut out = String::from("// Font Variables\n");

    for font in fonts {
        let _ = writeln!(out, "$font-{}: {};", slugify(&font.name), font.family());
    }

    out.push_str("\n// Font Map\n$fonts: (\n");
    for (index, font) in fonts.iter().enumerate() {
        let slug = slugify(&font.name);
        let separator = if index + 1 < fonts.len() { "," } else { "" };
        let _ = writeln!(out, "  \"{slug}\": $font-{slug}{separator}");
    }
    out.push_str(");\n\n");

    out.push_str("// Font Mixins\n");
    out.push_str("@mixin font-family($font-name) {\n");
    out.push_str("  font-family: map-get($fonts, $font-name);\n");
    out.push_str("}\n\n");
    out.push_str("@mixin responsive-font($base-size: 16px, $scale: 1.2) {\n");
    out.push_str("  font-size: $base-size;\n");
    out.push_str("  @media (max-width: 768px) {\n");
    out.push_str("    font-size: calc($base-size / $scale);\n");
    out.push_str("  }\n");
    out.push_str("}\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scss_variables_and_map() {
        let colors = vec![
            ColorRecord::new("Parchment", "#F9F5F0").unwrap(),
            ColorRecord::new("Autumn Blaze", "#F4991A").unwrap(),
        ];
        let scss = color_scss(&colors);

        assert!(scss.contains("$color-parchment: #F9F5F0;"));
        assert!(scss.contains("$color-parchment-rgb: 249, 245, 240;"));
        // Last map entry has no trailing comma
        assert!(scss.contains("  \"parchment\": $color-parchment,\n"));
        assert!(scss.contains("  \"autumn-blaze\": $color-autumn-blaze\n);"));
        assert!(scss.contains("@mixin text-color($color-name)"));
        assert!(scss.contains("@mixin background-color($color-name)"));
    }

    #[test]
    fn test_color_scss_single_entry_map() {
        let colors = vec![ColorRecord::new("Ink", "#101010").unwrap()];
        let scss = color_scss(&colors);
        assert!(scss.contains("  \"ink\": $color-ink\n);"));
        assert!(!scss.contains("$color-ink,"));
    }

    #[test]
    fn test_font_scss() {
        let fonts = vec![
            FontRecord::new("Raleway", "raleway", true, vec![400]).unwrap(),
            FontRecord::new("Lato", "lato", false, vec![400]).unwrap(),
        ];
        let scss = font_scss(&fonts);

        assert!(scss.contains("$font-raleway: 'Raleway', sans-serif;"));
        assert!(scss.contains("  \"raleway\": $font-raleway,\n"));
        assert!(scss.contains("  \"lato\": $font-lato\n);"));
        assert!(scss.contains("@mixin font-family($font-name)"));
        assert!(scss.contains("@mixin responsive-font"));
    }
}
