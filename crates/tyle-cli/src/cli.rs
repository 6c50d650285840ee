//! CLI argument definitions using Clap v4

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tyle_core::{StyleKind, Weight};

/// Tyle - inspect the typography style catalog from the command line
#[derive(Parser, Debug)]
#[command(name = "tyle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the styles and weights the catalog knows
    #[command(alias = "i")]
    Info(InfoArgs),

    /// Resolve one style into its attribute set
    #[command(alias = "r")]
    Resolve(ResolveArgs),

    /// Resolve every style at one weight
    #[command(alias = "c")]
    Catalog(CatalogArgs),
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// List the styles only
    #[arg(long)]
    pub styles: bool,

    /// List the weights only
    #[arg(long)]
    pub weights: bool,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Style name: headline, title1..title3, subtitle, body1, body2,
    /// caption1, caption2, button1, button2
    pub style: StyleKind,

    /// Font weight by name (bold, semibold, ...) or number (100-1000)
    #[arg(short = 'w', long = "weight", default_value = "regular")]
    pub weight: Weight,

    /// body2 only: long-form copy with a taller line
    #[arg(long = "long", action = ArgAction::SetTrue)]
    pub long: bool,

    /// caption1 only: underline the text
    #[arg(long = "underline", action = ArgAction::SetTrue)]
    pub underline: bool,

    /// button2 only: bold button with a tighter line
    #[arg(long = "bold", action = ArgAction::SetTrue)]
    pub bold: bool,

    /// Extra directory to search for font files (repeatable)
    #[arg(long = "font-dir", action = ArgAction::Append)]
    pub font_dirs: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'O', long = "format", default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Font weight applied to every style
    #[arg(short = 'w', long = "weight", default_value = "regular")]
    pub weight: Weight,

    /// Output format
    #[arg(short = 'O', long = "format", default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON
    Json,
    /// Aligned plain text
    Text,
}
