//! CSV file reading into per-file datasets.
//!
//! Every cell is read as text via `StringRecord` - no numeric, boolean, or
//! date inference, and blank cells stay as empty strings rather than a
//! null sentinel. The first record is the header; a record whose field
//! count differs from the header is a parse error, and the run aborts on
//! the first file that fails to read.

use std::path::{Path, PathBuf};

use crate::table::Dataset;

/// Errors that can occur while reading a single CSV file.
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// The file is empty, so there is no header row to read.
    #[error("{path}: file is empty (missing header row)")]
    Empty {
        /// Path of the offending file
        path: PathBuf,
    },

    /// The file could not be opened or parsed as delimited text.
    #[error("Failed to read {path}: {source}")]
    Parse {
        /// Path of the offending file
        path: PathBuf,
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },
}

impl ReadError {
    /// Path of the file that failed to read.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Empty { path } | Self::Parse { path, .. } => path,
        }
    }
}

/// Read one CSV file into a [`Dataset`].
///
/// # Arguments
///
/// * `path` - The file to read
///
/// # Errors
///
/// Returns `ReadError` if the file cannot be opened, has no header row,
/// or contains a record whose field count differs from the header.
pub fn read_dataset(path: &Path) -> Result<Dataset, ReadError> {
    let parse_error = |source| ReadError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(parse_error)?;

    let headers = reader.headers().map_err(parse_error)?;
    if headers.is_empty() {
        return Err(ReadError::Empty {
            path: path.to_path_buf(),
        });
    }
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    log::debug!(
        "{}: {} rows, {} columns",
        path.display(),
        rows.len(),
        columns.len()
    );

    Ok(Dataset::new(path.to_path_buf(), columns, rows))
}
