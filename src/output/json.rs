//! JSON output formatter for the row-count report.
//!
//! Provides machine-readable output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "csv_files": 2,
//!   "columns": 3,
//!   "counts": {
//!     "total_rows": 4,
//!     "unique_rows": 3,
//!     "duplicate_rows_extra": 1,
//!     "duplicate_rows_including_first": 2
//!   },
//!   "load_duration_ms": 12,
//!   "count_duration_ms": 1,
//!   "exit_code": 0,
//!   "exit_code_name": "CD000"
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::dedup::{CountReport, DedupCounts};
use crate::error::ExitCode;

/// The full report in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Number of CSV files loaded
    pub csv_files: usize,
    /// Number of columns in the combined table (union across files)
    pub columns: usize,
    /// The four row counts
    pub counts: DedupCounts,
    /// Wall time spent discovering and reading files, in milliseconds
    pub load_duration_ms: u64,
    /// Wall time spent combining and counting, in milliseconds
    pub count_duration_ms: u64,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "CD000")
    pub exit_code_name: String,
}

impl JsonReport {
    /// Create a JSON report from a count report and an exit code.
    #[must_use]
    pub fn new(report: &CountReport, exit_code: ExitCode) -> Self {
        Self {
            csv_files: report.csv_files,
            columns: report.columns,
            counts: report.counts,
            load_duration_ms: report.load_duration.as_millis() as u64,
            count_duration_ms: report.count_duration.as_millis() as u64,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if JSON encoding fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if JSON encoding fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty-printed JSON to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        let json = self.to_json_pretty()?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}
