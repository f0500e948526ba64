//! Inspect command: derived attributes for a single color.

use crate::accessibility::{self, RatingLevel};
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::RgbColor;
use crate::services::GuideService;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

/// Show the derived attributes of a color (hex literal or guide color name)
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// A `#RRGGBB` hex value, or the name of a color in the guide
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Path to style guide file (defaults to the configured or built-in guide)
    #[arg(short, long, value_name = "FILE")]
    pub guide: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let (name, color) = self.resolve_color()?;

        let hsl = color.to_hsl();
        let luminance = accessibility::relative_luminance(color);
        let with_white = accessibility::contrast_ratio(color, RgbColor::WHITE);
        let with_black = accessibility::contrast_ratio(color, RgbColor::BLACK);
        let rating = accessibility::accessibility_rating(color);
        let text_color = accessibility::preferred_text_color(color);

        if self.json {
            let response = json!({
                "name": name,
                "hex": color.to_hex(),
                "rgb": color.rgb_string(),
                "hsl": hsl.to_string(),
                "luminance": luminance,
                "contrastWithWhite": with_white,
                "contrastWithBlack": with_black,
                "rating": rating.level,
                "bestContrast": rating.best_contrast,
                "textColor": text_color,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        if let Some(name) = name {
            println!("Name:              {name}");
        }
        println!("Hex:               {}", color.to_hex());
        println!("RGB:               {}", color.rgb_string());
        println!("HSL:               {hsl}");
        println!("Luminance:         {luminance:.4}");
        println!("Contrast vs white: {with_white:.2}:1");
        println!("Contrast vs black: {with_black:.2}:1");
        println!(
            "Rating:            {} ({}, {:.1}:1)",
            rating.level,
            rating.level.label(),
            rating.best_contrast
        );
        println!("Text color:        {text_color}");

        if rating.level == RatingLevel::Fail {
            println!("\n⚠ This color cannot reach 4.5:1 against either text color");
        }

        Ok(())
    }

    /// Interprets the COLOR argument: hex literals parse directly, anything
    /// else is looked up by name in the guide.
    fn resolve_color(&self) -> CliResult<(Option<String>, RgbColor)> {
        if self.color.starts_with('#') {
            let color = RgbColor::from_hex(&self.color)
                .map_err(|e| CliError::usage(e.to_string()))?;
            return Ok((None, color));
        }

        let config = Config::load().unwrap_or_default();
        let guide = GuideService::resolve(self.guide.as_deref(), &config)
            .map_err(|e| CliError::io(format!("Failed to load style guide: {e}")))?;

        let record = guide
            .colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(&self.color))
            .ok_or_else(|| {
                CliError::validation(format!("No color named '{}' in the guide", self.color))
            })?;

        Ok((Some(record.name.clone()), record.color()))
    }
}
