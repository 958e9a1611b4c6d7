//! Command line argument parsing for the Concord CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Concord - a word concordance indexer backed by a binary search tree
#[derive(Parser, Debug, Clone)]
#[command(name = "concord")]
#[command(about = "Index words across text files and report their occurrences")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ConcordArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ConcordArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Index one or more text files into the repository
    Index(IndexArgs),

    /// Print the concordance in alphabetical order
    Report(ReportArgs),

    /// Show repository statistics
    Stats(StatsArgs),
}

/// Arguments for indexing files
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Text files to index
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Path to the repository file
    #[arg(
        short,
        long,
        value_name = "REPO_PATH",
        default_value = "repository.ccrd",
        env = "CONCORD_REPO"
    )]
    pub repo: PathBuf,
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Level of detail for each word entry
    #[arg(short, long, default_value = "lines")]
    pub detail: ReportDetail,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Path to the repository file
    #[arg(
        short,
        long,
        value_name = "REPO_PATH",
        default_value = "repository.ccrd",
        env = "CONCORD_REPO"
    )]
    pub repo: PathBuf,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the repository file
    #[arg(
        short,
        long,
        value_name = "REPO_PATH",
        default_value = "repository.ccrd",
        env = "CONCORD_REPO"
    )]
    pub repo: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}

/// Report detail levels, from file names only up to total frequencies
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportDetail {
    /// Only the files each word appears in
    Files,
    /// Files plus the line numbers within them
    Lines,
    /// Files, line numbers, and the total occurrence count
    Occurrences,
}
