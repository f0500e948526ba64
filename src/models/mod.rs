//! Data models for style guide colors, fonts, and typography.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business
//! logic.

pub mod color;
pub mod font;
pub mod rgb;
pub mod style_guide;
pub mod typography;

// Re-export all model types
pub use color::ColorRecord;
pub use font::{FontRecord, DEFAULT_PREVIEW};
pub use rgb::{HexFormatError, Hsl, RgbColor};
pub use style_guide::{
    ColorEntry, FontEntry, GuideDocument, GuideMetadata, GuideSection, Severity, StyleGuide,
    TypographyEntry, ValidationIssue, ValidationReport,
};
pub use typography::{HeadingTag, TypographyRecord};
