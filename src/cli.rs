//! Command-line interface definitions for csvdupe.
//!
//! This module defines all CLI arguments using the clap derive API. The
//! tool performs one operation, so there are no subcommands: the folder to
//! analyze is a positional argument, with global options for verbosity and
//! output format.
//!
//! # Example
//!
//! ```bash
//! # Count rows across all CSV files in a folder
//! csvdupe ~/exports
//!
//! # Machine-readable output for scripting
//! csvdupe ~/exports --output json
//!
//! # Verbose mode for debugging
//! csvdupe -v ~/exports
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Count total, unique, and duplicate rows across CSV files.
///
/// csvdupe loads every `*.csv` file directly inside the given folder,
/// concatenates their rows into one table (aligning columns by name), and
/// reports how many rows are exact duplicates of each other.
#[derive(Debug, Parser)]
#[command(name = "csvdupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder containing the CSV files to analyze
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except the report and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Output format (text for the console report, json for scripting)
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Emit errors as structured JSON on stderr
    #[arg(long)]
    pub json_errors: bool,

    /// Number of I/O threads for parallel file reads (default: 4)
    #[arg(long, value_name = "N", default_value = "4")]
    pub io_threads: usize,
}

/// Output format for the row-count report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain console report
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
