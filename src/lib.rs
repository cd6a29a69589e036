//! csvdupe - CSV Row Duplicate Counter
//!
//! A cross-platform Rust CLI application that loads every CSV file in a
//! selected folder, concatenates the rows into one column-aligned table,
//! and reports total, unique, and duplicate row counts.

pub mod cli;
pub mod dedup;
pub mod error;
pub mod logging;
pub mod output;
pub mod picker;
pub mod scanner;
pub mod table;

use std::io;

use crate::cli::{Cli, OutputFormat};
use crate::dedup::{CounterConfig, RowCounter};
use crate::error::ExitCode;
use crate::output::{JsonReport, TextReport};
use crate::picker::{ArgFolderSource, FolderSource};

/// Run the application with parsed CLI arguments.
///
/// Selects the folder, runs the counting pipeline, and writes the report
/// in the requested format.
///
/// # Errors
///
/// Returns an error when no folder was selected, the folder contains no
/// CSV files, or a file fails to read or parse. The caller maps the error
/// to an [`ExitCode`].
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet, cli.no_color);

    let folder = ArgFolderSource::new(cli.path.clone()).select_folder()?;
    log::info!("Selected folder: {}", folder.display());

    let config = CounterConfig::default().with_io_threads(cli.io_threads);
    let report = RowCounter::new(config).count_directory(&folder)?;

    match cli.output {
        OutputFormat::Text => TextReport::new(&report).write_to(io::stdout())?,
        OutputFormat::Json => {
            let json = JsonReport::new(&report, ExitCode::Success);
            println!("{}", json.to_json_pretty()?);
        }
    }

    Ok(ExitCode::Success)
}
