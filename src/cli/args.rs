//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `export`: Merge per-locale CSV files into one spreadsheet-style CSV
//! - `import`: Split a spreadsheet-style CSV back into per-locale CSV files
//! - `init`: Initialize labelsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Export(args)) => args.common.verbose,
            Some(Command::Import(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by export and import.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locales to process, comma separated (e.g. en_GB,fr_FR,es_ES).
    /// Detected from the locale directory when omitted
    #[arg(long, env = "LABELSYNC_LOCALE", value_delimiter = ',')]
    pub locale: Vec<String>,

    /// Silent: do not print warnings
    #[arg(short, long)]
    pub silent: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Name of the CSV file inside each locale directory (e.g. translate.csv)
    #[arg(long)]
    pub file: PathBuf,

    /// Locale root directory containing one sub-directory per locale
    #[arg(long)]
    pub source: PathBuf,

    /// Output file (default: ./<file>)
    #[arg(long)]
    pub destination: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Spreadsheet-style CSV file to import (e.g. ./translate.csv)
    #[arg(long)]
    pub file: PathBuf,

    /// Locale root directory receiving one sub-directory per locale
    #[arg(long)]
    pub destination: PathBuf,

    /// Discard existing entries of the destination files instead of merging
    #[arg(long)]
    pub truncate: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge <source>/<locale>/<file> into one CSV with a column per locale
    Export(ExportArgs),
    /// Split a CSV with a column per locale into <destination>/<locale>/<file>
    Import(ImportArgs),
    /// Initialize a new .labelsyncrc.json configuration file
    Init,
}
