//! JavaScript module generation for palettes and font sets.

use crate::export::slug::const_case;
use crate::models::{ColorRecord, FontRecord};
use std::fmt::Write as _;

/// Escapes a value for a single-quoted JS string literal.
fn js_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Renders the palette as an ES module: an object literal keyed by
/// UPPER_SNAKE constants plus lookup helpers.
///
/// ```js
/// export const colors = {
///   AUTUMN_BLAZE: {
///     name: 'Autumn Blaze',
///     hex: '#F4991A',
///     rgb: 'rgb(244, 153, 26)',
///     textColor: '#000'
///   }
/// };
/// ```
#[must_use]
pub fn color_js(colors: &[ColorRecord]) -> String {
    let mut out = String::from("export const colors = {\n");

    for (index, color) in colors.iter().enumerate() {
        let _ = writeln!(out, "  {}: {{", const_case(&color.name));
        let _ = writeln!(out, "    name: '{}',", js_string(&color.name));
        let _ = writeln!(out, "    hex: '{}',", color.hex);
        let _ = writeln!(out, "    rgb: '{}',", color.rgb);
        let _ = writeln!(out, "    textColor: '{}'", color.text_color);
        out.push_str("  }");
        out.push_str(if index + 1 < colors.len() { ",\n" } else { "\n" });
    }

    out.push_str("};\n\n");
    out.push_str("export const getColor = (colorName) => {\n");
    out.push_str(
        "  const key = colorName.toUpperCase().replace(/\\s+/g, '_').replace(/[^A-Z0-9_]/g, '');\n",
    );
    out.push_str("  return colors[key] || null;\n");
    out.push_str("};\n\n");
    out.push_str("export const getAllColors = () => Object.values(colors);\n");

    out
}

/// Renders the font set as an ES module, mirroring [`color_js`].
#[must_use]
pub fn font_js(fonts: &[FontRecord]) -> String {
    let mut out = String::from("export const fonts = {\n");

    for (index, font) in fonts.iter().enumerate() {
        let _ = writeln!(out, "  {}: {{", const_case(&font.name));
        let _ = writeln!(out, "    name: '{}',", js_string(&font.name));
        let _ = writeln!(out, "    className: '{}',", font.class_name);
        let _ = writeln!(out, "    family: \"{}\",", font.family());
        let _ = writeln!(out, "    preview: '{}'", js_string(&font.preview));
        out.push_str("  }");
        out.push_str(if index + 1 < fonts.len() { ",\n" } else { "\n" });
    }

    out.push_str("};\n\n");
    out.push_str("export const getFont = (fontName) => {\n");
    out.push_str(
        "  const key = fontName.toUpperCase().replace(/\\s+/g, '_').replace(/[^A-Z0-9_]/g, '');\n",
    );
    out.push_str("  return fonts[key] || null;\n");
    out.push_str("};\n\n");
    out.push_str("export const getAllFonts = () => Object.values(fonts);\n");

    out
}
