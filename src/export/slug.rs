//! CSS/JS identifier derivation from display names.

/// Derives a CSS-safe slug from a display name.
///
/// Lowercases the name, collapses whitespace runs into single hyphens, and
/// strips every character outside `[a-z0-9-]`.
///
/// # Examples
///
/// ```
/// use swatchbook::export::slugify;
///
/// assert_eq!(slugify("Autumn Blaze"), "autumn-blaze");
/// assert_eq!(slugify("Hunter's Green"), "hunters-green");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                slug.push(c);
            }
        }
    }

    slug
}

/// Derives a JS constant identifier (UPPER_SNAKE) from a display name.
#[must_use]
pub fn const_case(name: &str) -> String {
    slugify(name).replace('-', "_").to_ascii_uppercase()
}
