//! Export command for generating CSS, SCSS, JSON, and JS outputs.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export;
use crate::models::StyleGuide;
use crate::services::GuideService;
use chrono::Utc;
use clap::{Args, ValueEnum};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Which dataset of the guide to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Color swatches
    Colors,
    /// Font families
    Fonts,
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Colors => "colors",
            Self::Fonts => "fonts",
        };
        write!(f, "{s}")
    }
}

/// Output format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSS custom properties + utility classes
    Css,
    /// SCSS variables, maps, and mixins
    Scss,
    /// Pretty JSON token file
    Json,
    /// ES module source
    Js,
}

impl ExportFormat {
    /// File extension for the format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Js => "js",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Export style guide colors or fonts to a distributable format
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to style guide file (defaults to the configured or built-in guide)
    #[arg(short, long, value_name = "FILE")]
    pub guide: Option<PathBuf>,

    /// Which dataset to export
    #[arg(short, long, value_enum, default_value_t = ExportTarget::Colors)]
    pub target: ExportTarget,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Css)]
    pub format: ExportFormat,

    /// Output path (defaults to [guide_name]_[target]_[date].[ext])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        let guide = GuideService::resolve(self.guide.as_deref(), &config)
            .map_err(|e| CliError::io(format!("Failed to load style guide: {e}")))?;

        let rendered = self.render(&guide)?;

        if self.stdout {
            print!("{rendered}");
            return Ok(());
        }

        let output_path = self.output_path(&guide);
        fs::write(&output_path, rendered)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!("✓ Exported {} to: {}", self.target, output_path.display());

        Ok(())
    }

    /// Render the selected dataset in the selected format.
    fn render(&self, guide: &StyleGuide) -> CliResult<String> {
        let rendered = match (self.target, self.format) {
            (ExportTarget::Colors, ExportFormat::Css) => export::color_css(&guide.colors),
            (ExportTarget::Colors, ExportFormat::Scss) => export::color_scss(&guide.colors),
            (ExportTarget::Colors, ExportFormat::Json) => {
                export::color_json(&guide.colors, Utc::now())
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            }
            (ExportTarget::Colors, ExportFormat::Js) => export::color_js(&guide.colors),
            (ExportTarget::Fonts, ExportFormat::Css) => export::font_css(&guide.fonts),
            (ExportTarget::Fonts, ExportFormat::Scss) => export::font_scss(&guide.fonts),
            (ExportTarget::Fonts, ExportFormat::Json) => {
                export::font_json(&guide.fonts, Utc::now())
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            }
            (ExportTarget::Fonts, ExportFormat::Js) => export::font_js(&guide.fonts),
        };

        Ok(rendered)
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn output_path(&self, guide: &StyleGuide) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: [guide_name]_[target]_[date].[ext]
        let date = chrono::Local::now().format("%Y-%m-%d");
        let guide_name = guide.metadata.name.replace(' ', "_").to_lowercase();

        PathBuf::from(format!(
            "{}_{}_{}.{}",
            guide_name,
            self.target,
            date,
            self.format.extension()
        ))
    }
}
