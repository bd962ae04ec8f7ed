//! Command-line interface for ambucheck.
//!
//! This module provides the CLI structure and command handlers for the
//! `ambucheck` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, GenerateCommand, ItemsCommand, OutputFormat, SheetFormatArg, TemplateCommand,
};

/// ambucheck - Ambulance equipment checklist to PDF
///
/// Fills the unit equipment checklist from an answer sheet and exports it
/// as a signed PDF document.
#[derive(Debug, Parser)]
#[command(name = "ambucheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export a checklist PDF
    Generate(GenerateCommand),

    /// Print a blank answer sheet
    Template(TemplateCommand),

    /// List the checklist items
    Items(ItemsCommand),

    /// List the selectable ambulance units
    Units,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}
