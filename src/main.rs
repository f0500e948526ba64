//! Swatchbook - command-line style guide workspace
//!
//! This application works with design-system style guides: datasets of color
//! swatches, font records, and typography tokens that can be validated,
//! searched, inspected, and exported to CSS/SCSS/JSON/JS.

use clap::{Parser, Subcommand};
use swatchbook::cli::{CliErrorKind, ExportArgs, InspectArgs, SearchArgs, ValidateArgs};
use swatchbook::constants::APP_BINARY_NAME;

/// Swatchbook - command-line style guide workspace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export style guide colors or fonts to CSS, SCSS, JSON, or JS
    Export(ExportArgs),
    /// Validate a style guide file for errors and warnings
    Validate(ValidateArgs),
    /// Search style guide records by substring
    Search(SearchArgs),
    /// Show the derived attributes of a color
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Export(args) => args.execute(),
        Command::Validate(args) => args.execute(),
        Command::Search(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if e.kind() == CliErrorKind::Usage {
            eprintln!("Run '{APP_BINARY_NAME} --help' for usage.");
        }
        std::process::exit(e.exit_code());
    }
}
