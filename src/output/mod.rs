//! Output formatters for the row-count report.
//!
//! This module provides the two renderings of a completed run:
//! - plain console lines for humans
//! - JSON for automation and scripting
//!
//! # Example
//!
//! ```no_run
//! use csvdupe::dedup::RowCounter;
//! use csvdupe::output::TextReport;
//! use std::path::Path;
//!
//! let report = RowCounter::with_defaults()
//!     .count_directory(Path::new("."))
//!     .unwrap();
//!
//! TextReport::new(&report).write_to(std::io::stdout()).unwrap();
//! ```

pub mod json;
pub mod text;

// Re-export main types
pub use json::JsonReport;
pub use text::TextReport;
