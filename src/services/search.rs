//! Case-insensitive substring filtering over style guide records.

use crate::models::{ColorRecord, FontRecord, TypographyRecord};

/// A record type that exposes named fields to the search filter.
pub trait Searchable {
    /// Field names this record type can be matched on.
    const FIELDS: &'static [&'static str];

    /// Value of a named field, if the record has it.
    fn field(&self, name: &str) -> Option<&str>;
}

/// Filters `records` down to those where any of the named `fields` contains
/// `term`, case-insensitively.
///
/// The result is a subsequence of the input: matching records keep their
/// relative order. An empty term matches everything, so the full input comes
/// back element-for-element.
///
/// # Examples
///
/// ```
/// use swatchbook::models::ColorRecord;
/// use swatchbook::services::search;
///
/// let colors = vec![ColorRecord::new("Autumn Blaze", "#F4991A").unwrap()];
/// let hits = search::filter(&colors, "BLAZE", &["name"]);
/// assert_eq!(hits.len(), 1);
/// ```
#[must_use]
pub fn filter<'a, T: Searchable>(records: &'a [T], term: &str, fields: &[&str]) -> Vec<&'a T> {
    if term.is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            fields.iter().any(|name| {
                record
                    .field(name)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

impl Searchable for ColorRecord {
    const FIELDS: &'static [&'static str] = &["name", "hex", "rgb", "category"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "hex" => Some(&self.hex),
            "rgb" => Some(&self.rgb),
            "category" => Some(&self.category),
            _ => None,
        }
    }
}

impl Searchable for FontRecord {
    const FIELDS: &'static [&'static str] = &["name", "class", "category", "preview"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "class" => Some(&self.class_name),
            "category" => Some(&self.category),
            "preview" => Some(&self.preview),
            _ => None,
        }
    }
}

impl Searchable for TypographyRecord {
    const FIELDS: &'static [&'static str] = &["tag", "class", "text"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "tag" => Some(self.tag.as_str()),
            "class" => Some(&self.class_name),
            "text" => Some(&self.text),
            _ => None,
        }
    }
}
