//! Scanner module for CSV file discovery.
//!
//! Discovery is a non-recursive listing of one folder: only `*.csv` files
//! directly inside the selected directory are considered, matched
//! case-insensitively and returned sorted by file name.
//!
//! # Example
//!
//! ```no_run
//! use csvdupe::scanner::discover_csv_files;
//! use std::path::Path;
//!
//! let files = discover_csv_files(Path::new("/home/user/exports")).unwrap();
//! for file in &files {
//!     println!("{}", file.display());
//! }
//! ```

pub mod discover;

use std::path::PathBuf;

pub use discover::discover_csv_files;

/// Errors that can occur while listing the selected folder.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The folder path cannot be expressed as a listing pattern.
    #[error("Invalid folder path: {0}")]
    InvalidPath(PathBuf),

    /// An I/O error occurred while reading a directory entry.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "Path not found: /missing");

        let err = ScanError::NotADirectory(PathBuf::from("/file.txt"));
        assert_eq!(err.to_string(), "Not a directory: /file.txt");

        let err = ScanError::InvalidPath(PathBuf::from("/odd"));
        assert_eq!(err.to_string(), "Invalid folder path: /odd");
    }
}
