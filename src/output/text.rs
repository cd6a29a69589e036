//! Plain-text console report.
//!
//! Renders the five report lines:
//!
//! ```text
//! CSV files: 3
//! Total rows: 120
//! Unique rows: 100
//! Duplicate rows (extra copies only): 20
//! Duplicate rows (including first occurrences): 35
//! ```

use std::io;

use crate::dedup::CountReport;

/// Console report formatter.
pub struct TextReport<'a> {
    report: &'a CountReport,
}

impl<'a> TextReport<'a> {
    /// Create a new text report formatter.
    #[must_use]
    pub fn new(report: &'a CountReport) -> Self {
        Self { report }
    }

    /// Write the report lines to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        let counts = &self.report.counts;
        writeln!(writer, "CSV files: {}", self.report.csv_files)?;
        writeln!(writer, "Total rows: {}", counts.total_rows)?;
        writeln!(writer, "Unique rows: {}", counts.unique_rows)?;
        writeln!(
            writer,
            "Duplicate rows (extra copies only): {}",
            counts.duplicate_rows_extra
        )?;
        writeln!(
            writer,
            "Duplicate rows (including first occurrences): {}",
            counts.duplicate_rows_including_first
        )?;
        Ok(())
    }

    /// Generate the report as a string.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if formatting fails.
    pub fn to_string(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
