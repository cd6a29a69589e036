//! The counting pipeline and its derived statistics.
//!
//! # Overview
//!
//! [`RowCounter`] orchestrates the full run:
//! 1. **Discover**: list `*.csv` files in the selected folder
//! 2. **Read**: parse every file into a dataset (parallel across files)
//! 3. **Combine**: concatenate datasets over the union of their columns
//! 4. **Count**: group rows by value and derive [`DedupCounts`]
//!
//! Reads are parallel because each file's parse is independent; grouping
//! happens only after the whole combined table is materialized, since
//! duplicate detection needs global visibility across all files.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rayon::prelude::*;
use serde::Serialize;

use crate::dedup::RowGroups;
use crate::scanner::{discover_csv_files, ScanError};
use crate::table::{combine, read_dataset, CombinedTable, Dataset, ReadError};

/// Configuration for the counting pipeline.
#[derive(Debug, Clone)]
pub struct CounterConfig {
    /// Number of I/O threads for parallel file reads.
    /// Default is 4 to prevent disk thrashing.
    pub io_threads: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { io_threads: 4 }
    }
}

impl CounterConfig {
    /// Create a new configuration with custom I/O thread count.
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.io_threads = threads.max(1);
        self
    }
}

/// The four row counts derived from grouping a combined table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DedupCounts {
    /// Number of rows in the combined table
    pub total_rows: usize,
    /// Number of distinct rows under full-row string equality
    pub unique_rows: usize,
    /// Redundant copies beyond each row's first occurrence
    pub duplicate_rows_extra: usize,
    /// All members of groups with two or more rows, first occurrences included
    pub duplicate_rows_including_first: usize,
}

impl DedupCounts {
    /// Derive the counts from row groups.
    ///
    /// Each group of size `g` contributes `g` to the including-first count
    /// when `g >= 2`; the extra-copies count falls out of
    /// `total_rows - unique_rows`.
    #[must_use]
    pub fn from_groups(groups: &RowGroups<'_>) -> Self {
        let total_rows = groups.total_rows();
        let unique_rows = groups.distinct_rows();
        let duplicate_rows_including_first =
            groups.iter().map(|(_, n)| n).filter(|&n| n >= 2).sum();

        Self {
            total_rows,
            unique_rows,
            duplicate_rows_extra: total_rows - unique_rows,
            duplicate_rows_including_first,
        }
    }

    /// Whether any row occurs more than once.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.duplicate_rows_extra > 0
    }
}

/// Group the rows of a combined table and derive the counts.
///
/// Convenience wrapper for callers that already hold a combined table and
/// do not need the group structure itself.
#[must_use]
pub fn count_rows(table: &CombinedTable) -> DedupCounts {
    DedupCounts::from_groups(&RowGroups::from_table(table))
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct CountReport {
    /// The four row counts
    pub counts: DedupCounts,
    /// Number of CSV files loaded
    pub csv_files: usize,
    /// Number of columns in the combined table (union across files)
    pub columns: usize,
    /// Wall time spent discovering and reading files
    pub load_duration: Duration,
    /// Wall time spent combining and counting
    pub count_duration: Duration,
}

/// Errors that can occur during a counting run.
#[derive(thiserror::Error, Debug)]
pub enum CounterError {
    /// The selected folder contains no CSV files.
    #[error("No .csv files found in: {}", .0.display())]
    NoInputFound(PathBuf),

    /// The folder could not be listed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A file failed to read or parse.
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Pipeline orchestrator: discover, read, combine, count.
///
/// # Example
///
/// ```no_run
/// use csvdupe::dedup::{CounterConfig, RowCounter};
/// use std::path::Path;
///
/// let counter = RowCounter::new(CounterConfig::default().with_io_threads(2));
/// let report = counter.count_directory(Path::new("/data/exports")).unwrap();
///
/// assert_eq!(
///     report.counts.total_rows,
///     report.counts.unique_rows + report.counts.duplicate_rows_extra
/// );
/// ```
#[derive(Debug)]
pub struct RowCounter {
    config: CounterConfig,
}

impl RowCounter {
    /// Create a new counter with the given configuration.
    #[must_use]
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    /// Create a new counter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CounterConfig::default())
    }

    /// Run the full pipeline over all CSV files in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `CounterError` if the folder cannot be listed, contains no
    /// CSV files, or any file fails to read or parse (fail-fast).
    pub fn count_directory(&self, dir: &Path) -> Result<CountReport, CounterError> {
        let files = discover_csv_files(dir)?;
        if files.is_empty() {
            return Err(CounterError::NoInputFound(dir.to_path_buf()));
        }
        log::info!("Loading {} CSV files from {}", files.len(), dir.display());
        self.count_files(&files)
    }

    /// Run the pipeline over an explicit list of files, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `CounterError` if any file fails to read or parse.
    pub fn count_files(&self, files: &[PathBuf]) -> Result<CountReport, CounterError> {
        let load_start = std::time::Instant::now();
        let datasets = self.read_all(files)?;
        let load_duration = load_start.elapsed();

        for dataset in &datasets {
            log::debug!(
                "{}: {} rows",
                dataset.path.display(),
                dataset.row_count()
            );
        }

        let count_start = std::time::Instant::now();
        let table = combine(datasets);
        let groups = RowGroups::from_table(&table);
        let counts = DedupCounts::from_groups(&groups);
        let count_duration = count_start.elapsed();

        log::info!(
            "{} rows across {} files: {} unique, {} duplicate groups",
            counts.total_rows,
            files.len(),
            counts.unique_rows,
            groups.duplicate_groups()
        );

        Ok(CountReport {
            counts,
            csv_files: files.len(),
            columns: table.column_count(),
            load_duration,
            count_duration,
        })
    }

    /// Read all files into datasets, preserving input order.
    ///
    /// Parses in parallel on a bounded thread pool; the first failure
    /// aborts the whole read.
    fn read_all(&self, files: &[PathBuf]) -> Result<Vec<Dataset>, ReadError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.io_threads)
            .build()
            .unwrap_or_else(|_| {
                log::warn!(
                    "Failed to create custom thread pool, using global pool with {} threads",
                    rayon::current_num_threads()
                );
                rayon::ThreadPoolBuilder::new().build().unwrap()
            });

        pool.install(|| {
            files
                .par_iter()
                .map(|path| read_dataset(path))
                .collect::<Result<Vec<_>, _>>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Dataset;

    fn dataset(name: &str, columns: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            PathBuf::from(name),
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|f| f.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_counts_all_distinct() {
        let table = combine(vec![dataset(
            "a.csv",
            &["x"],
            &[&["1"], &["2"], &["3"]],
        )]);
        let counts = count_rows(&table);

        assert_eq!(counts.total_rows, 3);
        assert_eq!(counts.unique_rows, 3);
        assert_eq!(counts.duplicate_rows_extra, 0);
        assert_eq!(counts.duplicate_rows_including_first, 0);
        assert!(!counts.has_duplicates());
    }

    #[test]
    fn test_counts_all_identical() {
        let table = combine(vec![dataset(
            "a.csv",
            &["x"],
            &[&["1"], &["1"], &["1"], &["1"]],
        )]);
        let counts = count_rows(&table);

        assert_eq!(counts.total_rows, 4);
        assert_eq!(counts.unique_rows, 1);
        assert_eq!(counts.duplicate_rows_extra, 3);
        assert_eq!(counts.duplicate_rows_including_first, 4);
    }

    #[test]
    fn test_counts_two_file_scenario() {
        // file1 and file2 share one row value; the rest are distinct.
        let file1 = dataset("1.csv", &["X", "Y"], &[&["a", "1"], &["b", "2"]]);
        let file2 = dataset("2.csv", &["X", "Y"], &[&["a", "1"], &["c", "3"]]);
        let counts = count_rows(&combine(vec![file1, file2]));

        assert_eq!(counts.total_rows, 4);
        assert_eq!(counts.unique_rows, 3);
        assert_eq!(counts.duplicate_rows_extra, 1);
        assert_eq!(counts.duplicate_rows_including_first, 2);
    }

    #[test]
    fn test_counts_mixed_group_sizes() {
        // "a" occurs 3 times, "b" twice, "c" once:
        // extra = (3-1) + (2-1) = 3, including-first = 3 + 2 = 5.
        let table = combine(vec![dataset(
            "a.csv",
            &["x"],
            &[&["a"], &["a"], &["a"], &["b"], &["b"], &["c"]],
        )]);
        let counts = count_rows(&table);

        assert_eq!(counts.total_rows, 6);
        assert_eq!(counts.unique_rows, 3);
        assert_eq!(counts.duplicate_rows_extra, 3);
        assert_eq!(counts.duplicate_rows_including_first, 5);
    }

    #[test]
    fn test_counts_empty_table() {
        let counts = count_rows(&CombinedTable::empty());
        assert_eq!(counts, DedupCounts::default());
    }

    #[test]
    fn test_reordered_columns_count_as_duplicates() {
        let file1 = dataset("1.csv", &["B", "A"], &[&["2", "1"]]);
        let file2 = dataset("2.csv", &["A", "B"], &[&["1", "2"]]);
        let counts = count_rows(&combine(vec![file1, file2]));

        assert_eq!(counts.total_rows, 2);
        assert_eq!(counts.unique_rows, 1);
        assert_eq!(counts.duplicate_rows_extra, 1);
        assert_eq!(counts.duplicate_rows_including_first, 2);
    }

    #[test]
    fn test_filled_columns_participate_in_identity() {
        // A row with an explicit empty cell equals a row whose file never
        // had the column at all.
        let file1 = dataset("1.csv", &["a", "b"], &[&["1", ""]]);
        let file2 = dataset("2.csv", &["a"], &[&["1"]]);
        let counts = count_rows(&combine(vec![file1, file2]));

        assert_eq!(counts.unique_rows, 1);
        assert_eq!(counts.duplicate_rows_including_first, 2);
    }

    #[test]
    fn test_counter_config_minimum_one_thread() {
        let config = CounterConfig::default().with_io_threads(0);
        assert_eq!(config.io_threads, 1);
    }

    #[test]
    fn test_no_input_error_message() {
        let err = CounterError::NoInputFound(PathBuf::from("/data/empty"));
        assert_eq!(err.to_string(), "No .csv files found in: /data/empty");
    }
}
