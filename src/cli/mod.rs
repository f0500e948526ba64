//! CLI command handlers for Swatchbook.
//!
//! This module provides headless, scriptable access to Swatchbook's core
//! functionality for automation, testing, and CI/CD integration.

pub mod common;
pub mod export;
pub mod inspect;
pub mod search;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliErrorKind, CliResult};
pub use export::{ExportArgs, ExportFormat, ExportTarget};
pub use inspect::InspectArgs;
pub use search::{SearchArgs, SearchTarget};
pub use validate::ValidateArgs;
