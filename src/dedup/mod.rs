//! Row deduplication and counting.
//!
//! This module is the heart of the tool: it groups the rows of a combined
//! table by full-row value equality and derives the four row counts from
//! the group sizes.
//!
//! # Architecture
//!
//! - [`groups`]: grouping of rows into occurrence counts ([`RowGroups`])
//! - [`counter`]: the derived counts ([`DedupCounts`]) and the
//!   [`RowCounter`] pipeline that runs discover, read, combine, and count
//!
//! # Example
//!
//! ```no_run
//! use csvdupe::dedup::RowCounter;
//! use std::path::Path;
//!
//! let report = RowCounter::with_defaults()
//!     .count_directory(Path::new("/home/user/exports"))
//!     .unwrap();
//!
//! println!("{} duplicate rows", report.counts.duplicate_rows_extra);
//! ```

pub mod counter;
pub mod groups;

pub use counter::{count_rows, CountReport, CounterConfig, CounterError, DedupCounts, RowCounter};
pub use groups::RowGroups;
