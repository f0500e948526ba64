//! Validation command for style guide files.

use crate::cli::common::{
    CliError, CliResult, ValidationChecks, ValidationMessage, ValidationResponse,
};
use crate::models::{GuideSection, Severity};
use crate::services::GuideService;
use clap::Args;
use std::path::PathBuf;

/// Validate a style guide file for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to style guide file
    #[arg(short, long, value_name = "FILE")]
    pub guide: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        // Parse the document form; record rules are checked by validation,
        // not at load time, so every finding gets reported
        let document = GuideService::load_document(&self.guide)
            .map_err(|e| CliError::io(format!("Failed to load style guide: {e:#}")))?;

        // Validate
        let report = document.validate();

        // Build response
        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();

        for issue in &report.issues {
            let status = match issue.severity {
                Severity::Error => "failed",
                Severity::Warning => "warning",
            };

            // An error outranks a warning in the per-section rollup
            let slot = match issue.section {
                GuideSection::Colors => &mut checks.colors,
                GuideSection::Fonts => &mut checks.fonts,
                GuideSection::Typography => &mut checks.typography,
            };
            if slot.as_str() != "failed" {
                *slot = status.to_string();
            }

            messages.push(ValidationMessage {
                severity: match issue.severity {
                    Severity::Error => "error".to_string(),
                    Severity::Warning => "warning".to_string(),
                },
                section: issue.section.to_string(),
                message: issue.message.clone(),
            });
        }

        let response = ValidationResponse {
            valid: report.is_valid(),
            messages,
            checks,
        };

        // Output results
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            println!("\nChecks:");
            println!("  Colors:     {}", response.checks.colors);
            println!("  Fonts:      {}", response.checks.fonts);
            println!("  Typography: {}", response.checks.typography);

            if !response.messages.is_empty() {
                println!("\nIssues:");
                for msg in &response.messages {
                    let prefix = if msg.severity == "error" {
                        "  ✗"
                    } else {
                        "  ⚠"
                    };
                    println!("{} [{}] {}", prefix, msg.section, msg.message);
                }
            }
        }

        // Exit code
        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !response.messages.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
