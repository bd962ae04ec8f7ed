//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::checklist::sheet::SheetFormat;

/// Generate command arguments.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Answer sheet (TOML or JSON); omit for a blank checklist
    pub sheet: Option<PathBuf>,

    /// Ambulance unit, e.g. 03 (overrides the sheet)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Checklist date as YYYY-MM-DD (overrides the sheet, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// PNG signature of the responsible person on shift
    #[arg(long, value_name = "PNG")]
    pub responsible: Option<PathBuf>,

    /// PNG signature of the operations coordinator
    #[arg(long, value_name = "PNG")]
    pub coordinator: Option<PathBuf>,

    /// Directory to write the PDF into
    #[arg(short, long, value_name = "DIR", conflicts_with = "stdout")]
    pub output_dir: Option<PathBuf>,

    /// Write the PDF to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,
}

/// Template command arguments.
#[derive(Debug, Args)]
pub struct TemplateCommand {
    /// Unit written into the template
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Template format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: SheetFormatArg,
}

/// Items command arguments.
#[derive(Debug, Args)]
pub struct ItemsCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Answer sheet format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SheetFormatArg {
    /// TOML sheet
    #[default]
    Toml,
    /// JSON sheet
    Json,
}

impl From<SheetFormatArg> for SheetFormat {
    fn from(arg: SheetFormatArg) -> Self {
        match arg {
            SheetFormatArg::Toml => Self::Toml,
            SheetFormatArg::Json => Self::Json,
        }
    }
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}
