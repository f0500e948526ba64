//! Search command for filtering style guide records.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::services::search::{self, Searchable};
use crate::services::GuideService;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Which record set to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchTarget {
    /// Color swatches
    Colors,
    /// Font families
    Fonts,
    /// Typography tokens
    Typography,
}

impl fmt::Display for SearchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Colors => "colors",
            Self::Fonts => "fonts",
            Self::Typography => "typography",
        };
        write!(f, "{s}")
    }
}

/// Search style guide records by substring
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search term (matched case-insensitively; empty matches everything)
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Path to style guide file (defaults to the configured or built-in guide)
    #[arg(short, long, value_name = "FILE")]
    pub guide: Option<PathBuf>,

    /// Which record set to search
    #[arg(short, long, value_enum, default_value_t = SearchTarget::Colors)]
    pub target: SearchTarget,

    /// Restrict matching to specific fields (repeatable)
    #[arg(long = "field", value_name = "NAME")]
    pub fields: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        let guide = GuideService::resolve(self.guide.as_deref(), &config)
            .map_err(|e| CliError::io(format!("Failed to load style guide: {e}")))?;

        match self.target {
            SearchTarget::Colors => self.run(&guide.colors, |color| {
                format!("{}  {}  {}  [{}]", color.name, color.hex, color.rgb, color.category)
            }),
            SearchTarget::Fonts => self.run(&guide.fonts, |font| {
                format!(
                    "{}  .{}  [{}]  weights: {}",
                    font.name,
                    font.class_name,
                    font.category,
                    font.weights
                        .iter()
                        .map(u16::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }),
            SearchTarget::Typography => self.run(&guide.typography, |record| {
                format!("{}  .{}  \"{}\"", record.tag, record.class_name, record.text)
            }),
        }
    }

    /// Filter one record set, then print matches as lines or JSON.
    fn run<T: Searchable + Serialize>(
        &self,
        records: &[T],
        describe: impl Fn(&T) -> String,
    ) -> CliResult<()> {
        let fields = self.effective_fields::<T>()?;
        let field_refs: Vec<&str> = fields.iter().map(String::as_str).collect();

        let matches = search::filter(records, &self.term, &field_refs);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&matches)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        if matches.is_empty() {
            println!("No {} match '{}'", self.target, self.term);
            return Ok(());
        }

        for record in &matches {
            println!("{}", describe(*record));
        }
        println!("\n{} of {} {} matched", matches.len(), records.len(), self.target);

        Ok(())
    }

    /// The fields to match on: the user's `--field` list, or every field the
    /// record type exposes.
    fn effective_fields<T: Searchable>(&self) -> CliResult<Vec<String>> {
        if self.fields.is_empty() {
            return Ok(T::FIELDS.iter().map(ToString::to_string).collect());
        }

        for field in &self.fields {
            if !T::FIELDS.contains(&field.as_str()) {
                return Err(CliError::usage(format!(
                    "Unknown field '{}' for {} (expected one of: {})",
                    field,
                    self.target,
                    T::FIELDS.join(", ")
                )));
            }
        }

        Ok(self.fields.clone())
    }
}
