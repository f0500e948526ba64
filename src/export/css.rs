//! CSS generation for color palettes and font showcases.

use crate::export::slug::slugify;
use crate::models::{ColorRecord, FontRecord};
use std::fmt::Write as _;

/// Renders the custom-property block for a palette.
///
/// Emits one `--color-<slug>` / `--color-<slug>-rgb` declaration pair per
/// record, in input order, inside a `:root { ... }` wrapper:
///
/// ```css
/// :root {
///   --color-autumn-blaze: #F4991A;
///   --color-autumn-blaze-rgb: 244, 153, 26;
/// }
/// ```
#[must_use]
pub fn css_variables(colors: &[ColorRecord]) -> String {
    let mut out = String::from(":root {\n");

    for color in colors {
        let slug = slugify(&color.name);
        let rgb = color.color();
        let _ = writeln!(out, "  --color-{slug}: {};", color.hex);
        let _ = writeln!(out, "  --color-{slug}-rgb: {}, {}, {};", rgb.r, rgb.g, rgb.b);
    }

    out.push_str("}\n");
    out
}

/// Renders the full color stylesheet: the variable block plus
/// text/background/border utility classes per swatch.
#[must_use]
pub fn color_css(colors: &[ColorRecord]) -> String {
    let mut out = css_variables(colors);
    out.push('\n');
    out.push_str("/* Color Utility Classes */\n");

    for color in colors {
        let slug = slugify(&color.name);
        let _ = writeln!(out, ".text-{slug} {{ color: var(--color-{slug}); }}");
        let _ = writeln!(out, ".bg-{slug} {{ background-color: var(--color-{slug}); }}");
        let _ = writeln!(out, ".border-{slug} {{ border-color: var(--color-{slug}); }}");
    }

    out
}

/// Renders the font stylesheet: a Google Fonts import, `--font-<slug>`
/// variables, and `.font-<slug>` classes.
#[must_use]
pub fn font_css(fonts: &[FontRecord]) -> String {
    let mut out = String::from("/* Font Face Declarations */\n");
    let _ = writeln!(out, "@import url('{}');", google_fonts_import_url(fonts));
    out.push('\n');

    out.push_str("/* Font Variables */\n:root {\n");
    for font in fonts {
        let _ = writeln!(out, "  --font-{}: {};", slugify(&font.name), font.family());
    }
    out.push_str("}\n\n");

    out.push_str("/* Font Classes */\n");
    for font in fonts {
        let slug = slugify(&font.name);
        let _ = writeln!(out, ".font-{slug} {{\n  font-family: var(--font-{slug});\n}}\n");
    }

    out
}

/// Builds the CSS2 API URL loading every font at its declared weights.
#[must_use]
pub fn google_fonts_import_url(fonts: &[FontRecord]) -> String {
    let families = fonts
        .iter()
        .map(|font| {
            let name = font.name.replace(' ', "+");
            let weights = font
                .weights
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(";");
            format!("family={name}:wght@{weights}")
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("https://fonts.googleapis.com/css2?{families}&display=swap")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<ColorRecord> {
        vec![
            ColorRecord::new("Autumn Blaze", "#F4991A").unwrap(),
            ColorRecord::new("Hunter's Green", "#344F1F").unwrap(),
        ]
    }

    #[test]
    fn test_css_variables_exact_output() {
        let css = css_variables(&palette());
        let expected = ":root {\n  --color-autumn-blaze: #F4991A;\n  --color-autumn-blaze-rgb: 244, 153, 26;\n  --color-hunters-green: #344F1F;\n  --color-hunters-green-rgb: 52, 79, 31;\n}\n";
        assert_eq!(css, expected);
    }

    #[test]
    fn test_css_variables_empty_palette() {
        assert_eq!(css_variables(&[]), ":root {\n}\n");
    }

    #[test]
    fn test_css_variables_preserves_input_order() {
        let mut colors = palette();
        colors.reverse();
        let css = css_variables(&colors);
        let green = css.find("hunters-green").unwrap();
        let blaze = css.find("autumn-blaze").unwrap();
        assert!(green < blaze);
    }

    #[test]
    fn test_color_css_includes_utilities() {
        let css = color_css(&palette());
        assert!(css.contains("/* Color Utility Classes */"));
        assert!(css.contains(".text-autumn-blaze { color: var(--color-autumn-blaze); }"));
        assert!(css.contains(".bg-hunters-green { background-color: var(--color-hunters-green); }"));
        assert!(css.contains(".border-autumn-blaze { border-color: var(--color-autumn-blaze); }"));
    }

    #[test]
    fn test_font_css() {
        let fonts = vec![
            FontRecord::new("Raleway", "raleway", true, vec![100, 400, 900]).unwrap(),
            FontRecord::new("Merriweather", "merriweather", false, vec![300, 700]).unwrap(),
        ];
        let css = font_css(&fonts);

        assert!(css.contains(
            "@import url('https://fonts.googleapis.com/css2?family=Raleway:wght@100;400;900&family=Merriweather:wght@300;700&display=swap');"
        ));
        assert!(css.contains("  --font-raleway: 'Raleway', sans-serif;"));
        assert!(css.contains(".font-merriweather {\n  font-family: var(--font-merriweather);\n}"));
    }

    #[test]
    fn test_google_fonts_url_escapes_spaces() {
        let fonts = vec![FontRecord::new("Source Serif", "source-serif", false, vec![400]).unwrap()];
        let url = google_fonts_import_url(&fonts);
        assert!(url.contains("family=Source+Serif:wght@400"));
    }
}
