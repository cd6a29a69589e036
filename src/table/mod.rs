//! Tabular data structures and the column-union combine step.
//!
//! # Overview
//!
//! Every input file parses into a [`Dataset`]: a header plus rows of text
//! fields. [`combine`] concatenates all datasets into one [`CombinedTable`]
//! over the union of their columns, so that the same named column sits at
//! the same position in every row regardless of which file it came from.
//! Cells for columns a file does not have are filled with the empty string.
//!
//! The combined table is built once per run and read-only afterwards;
//! duplicate counting never compares rows in a misaligned layout.
//!
//! # Example
//!
//! ```
//! use csvdupe::table::{combine, Dataset};
//! use std::path::PathBuf;
//!
//! let file1 = Dataset::new(
//!     PathBuf::from("a.csv"),
//!     vec!["X".into(), "Y".into()],
//!     vec![vec!["a".into(), "1".into()]],
//! );
//! let file2 = Dataset::new(
//!     PathBuf::from("b.csv"),
//!     vec!["Y".into(), "X".into()],
//!     vec![vec!["1".into(), "a".into()]],
//! );
//!
//! let table = combine(vec![file1, file2]);
//! assert_eq!(table.columns, vec!["X", "Y"]);
//! // Both rows align to the same layout and are equal.
//! assert_eq!(table.rows[0], table.rows[1]);
//! ```

pub mod reader;

use std::collections::HashMap;
use std::path::PathBuf;

pub use reader::{read_dataset, ReadError};

/// One row of the combined table: text fields positionally aligned to the
/// combined column set.
pub type Row = Vec<String>;

/// The parsed contents of a single CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Path of the source file
    pub path: PathBuf,
    /// Column names as they appear in the header row
    pub columns: Vec<String>,
    /// Data rows; each row has exactly `columns.len()` fields
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a new dataset.
    #[must_use]
    pub fn new(path: PathBuf, columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            path,
            columns,
            rows,
        }
    }

    /// Number of data rows (header excluded).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// The concatenation of all datasets over the union of their columns.
///
/// Row order is file order, then row order within each file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedTable {
    /// Union of all column names in first-seen order
    pub columns: Vec<String>,
    /// Aligned rows; each row has exactly `columns.len()` fields
    pub rows: Vec<Row>,
}

impl CombinedTable {
    /// An empty table with no columns and no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the union.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Column identity used for alignment across files.
///
/// A name that repeats within one header denotes distinct columns, so the
/// key pairs the name with its occurrence index: the n-th `"id"` column of
/// one file aligns with the n-th `"id"` column of another.
fn column_keys(header: &[String]) -> Vec<(String, usize)> {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    header
        .iter()
        .map(|name| {
            let n = occurrences.entry(name.as_str()).or_insert(0);
            let key = (name.clone(), *n);
            *n += 1;
            key
        })
        .collect()
}

/// Concatenate datasets into one table over the union of their columns.
///
/// The union preserves first-seen order: columns of the first file in
/// header order, then columns later files introduce, in the order they
/// appear. Every row is reindexed to that layout; cells for columns its
/// file lacks become the empty string.
///
/// The result holds the rows of all datasets in input order, so its row
/// count always equals the sum of the per-dataset row counts.
#[must_use]
pub fn combine(datasets: Vec<Dataset>) -> CombinedTable {
    let mut columns: Vec<String> = Vec::new();
    let mut index: HashMap<(String, usize), usize> = HashMap::new();

    for dataset in &datasets {
        for key in column_keys(&dataset.columns) {
            if !index.contains_key(&key) {
                columns.push(key.0.clone());
                index.insert(key, columns.len() - 1);
            }
        }
    }

    let width = columns.len();
    let total: usize = datasets.iter().map(Dataset::row_count).sum();
    let mut rows: Vec<Row> = Vec::with_capacity(total);

    for dataset in datasets {
        let targets: Vec<usize> = column_keys(&dataset.columns)
            .iter()
            .map(|key| index[key])
            .collect();

        log::trace!(
            "Aligning {} rows from {} onto {} columns",
            dataset.rows.len(),
            dataset.path.display(),
            width
        );

        for row in dataset.rows {
            let mut aligned: Row = vec![String::new(); width];
            for (position, field) in row.into_iter().enumerate() {
                aligned[targets[position]] = field;
            }
            rows.push(aligned);
        }
    }

    CombinedTable { columns, rows }
}
