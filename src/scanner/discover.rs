//! Non-recursive discovery of CSV files in the selected folder.

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};

use super::ScanError;

/// List all `*.csv` files directly inside `dir`, sorted by file name.
///
/// The extension is matched case-insensitively, so `report.CSV` is
/// included. Subdirectories are never entered, and a directory whose name
/// happens to end in `.csv` is skipped.
///
/// # Arguments
///
/// * `dir` - The folder to list
///
/// # Errors
///
/// Returns `ScanError` if the folder does not exist, is not a directory,
/// or a directory entry cannot be read.
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    // The folder part is literal, so any glob metacharacters in it must
    // be escaped before splicing in the *.csv pattern.
    let dir_str = dir
        .to_str()
        .ok_or_else(|| ScanError::InvalidPath(dir.to_path_buf()))?;
    let pattern = format!("{}/*.csv", Pattern::escape(dir_str));

    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    for entry in
        glob_with(&pattern, options).map_err(|_| ScanError::InvalidPath(dir.to_path_buf()))?
    {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    files.push(path);
                } else {
                    log::debug!("Skipping non-file match: {}", path.display());
                }
            }
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(ScanError::Io {
                    path,
                    source: e.into_error(),
                });
            }
        }
    }

    // Glob yields alphabetical order already; sorting keeps the contract
    // explicit and independent of the matcher.
    files.sort();

    log::debug!("Found {} CSV files in {}", files.len(), dir.display());
    Ok(files)
}
