//! Export functionality for style guide datasets.
//!
//! This module turns an in-memory color/font dataset into distributable
//! formats: CSS custom properties and utility classes, SCSS variables and
//! mixins, pretty JSON token files, and ES module sources. All generators
//! are pure and preserve record input order.

pub mod css;
pub mod js;
pub mod json;
pub mod scss;
pub mod slug;

pub use css::{color_css, css_variables, font_css, google_fonts_import_url};
pub use js::{color_js, font_js};
pub use json::{color_json, font_json};
pub use scss::{color_scss, font_scss};
pub use slug::{const_case, slugify};
