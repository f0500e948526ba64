//! Shared CLI error and response types.

use serde::Serialize;
use std::fmt;

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Category a CLI failure falls into; determines the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad arguments or unusable invocation
    Usage,
    /// The input was loadable but failed validation rules
    Validation,
    /// File system or serialization failure
    Io,
}

/// An error from a CLI command, carrying its exit-code category.
#[derive(Debug)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// Creates a usage error (exit code 64).
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Usage,
            message: message.into(),
        }
    }

    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// The failure category.
    #[must_use]
    pub const fn kind(&self) -> CliErrorKind {
        self.kind
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Validation => 1,
            CliErrorKind::Io => 2,
            CliErrorKind::Usage => 64,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Per-section check status for `validate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationChecks {
    /// Color section status ("passed", "failed", or "warning")
    pub colors: String,
    /// Font section status
    pub fonts: String,
    /// Typography section status
    pub typography: String,
}

impl ValidationChecks {
    /// All sections passing.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            colors: "passed".to_string(),
            fonts: "passed".to_string(),
            typography: "passed".to_string(),
        }
    }
}

/// One finding in a `validate --json` response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Guide section the finding belongs to
    pub section: String,
    /// Human-readable description
    pub message: String,
}

/// Full machine-readable response for `validate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// Whether the guide passed validation
    pub valid: bool,
    /// All findings in discovery order
    pub messages: Vec<ValidationMessage>,
    /// Per-section rollup
    pub checks: ValidationChecks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("x").exit_code(), 1);
        assert_eq!(CliError::io("x").exit_code(), 2);
        assert_eq!(CliError::usage("x").exit_code(), 64);
    }

    #[test]
    fn test_display_is_message_only() {
        let err = CliError::io("Failed to read file");
        assert_eq!(err.to_string(), "Failed to read file");
        assert_eq!(err.kind(), CliErrorKind::Io);
    }
}
