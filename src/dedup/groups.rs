//! Grouping of combined-table rows by full-row value equality.
//!
//! Two rows belong to the same group iff every field in every aligned
//! column position is identically equal: string equality, case-sensitive,
//! whitespace-sensitive. The source file of a row plays no part in its
//! identity. Grouping requires global visibility of the whole combined
//! table, so it runs strictly after the combine step.

use std::collections::HashMap;

use crate::table::CombinedTable;

/// Occurrence counts of distinct rows in a combined table.
///
/// Borrows the rows of the table it was built from; the table is read-only
/// for the lifetime of the groups.
#[derive(Debug, Clone)]
pub struct RowGroups<'a> {
    counts: HashMap<&'a [String], usize>,
    total_rows: usize,
}

impl<'a> RowGroups<'a> {
    /// Group all rows of a combined table by value.
    ///
    /// Single pass over the rows; the resulting map holds one entry per
    /// distinct row value with its number of occurrences.
    #[must_use]
    pub fn from_table(table: &'a CombinedTable) -> Self {
        let mut counts: HashMap<&[String], usize> = HashMap::new();
        for row in &table.rows {
            *counts.entry(row.as_slice()).or_insert(0) += 1;
        }
        Self {
            counts,
            total_rows: table.rows.len(),
        }
    }

    /// Total number of rows that were grouped.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Number of distinct row values.
    #[must_use]
    pub fn distinct_rows(&self) -> usize {
        self.counts.len()
    }

    /// Number of groups with two or more members.
    #[must_use]
    pub fn duplicate_groups(&self) -> usize {
        self.counts.values().filter(|&&n| n >= 2).count()
    }

    /// Number of occurrences of the given row value (0 if absent).
    #[must_use]
    pub fn occurrences(&self, row: &[String]) -> usize {
        self.counts.get(row).copied().unwrap_or(0)
    }

    /// Iterate over `(row, occurrence count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a [String], usize)> + '_ {
        self.counts.iter().map(|(&row, &n)| (row, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CombinedTable;

    fn table(rows: &[&[&str]]) -> CombinedTable {
        let width = rows.first().map_or(0, |r| r.len());
        CombinedTable {
            columns: (0..width).map(|i| format!("c{i}")).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|f| f.to_string()).collect())
                .collect(),
        }
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_groups_of_empty_table() {
        let t = CombinedTable::empty();
        let groups = RowGroups::from_table(&t);
        assert_eq!(groups.total_rows(), 0);
        assert_eq!(groups.distinct_rows(), 0);
        assert_eq!(groups.duplicate_groups(), 0);
    }

    #[test]
    fn test_groups_count_occurrences() {
        let t = table(&[&["a", "1"], &["b", "2"], &["a", "1"], &["a", "1"]]);
        let groups = RowGroups::from_table(&t);

        assert_eq!(groups.total_rows(), 4);
        assert_eq!(groups.distinct_rows(), 2);
        assert_eq!(groups.duplicate_groups(), 1);
        assert_eq!(groups.occurrences(&row(&["a", "1"])), 3);
        assert_eq!(groups.occurrences(&row(&["b", "2"])), 1);
        assert_eq!(groups.occurrences(&row(&["c", "3"])), 0);
    }

    #[test]
    fn test_groups_are_case_and_whitespace_sensitive() {
        let t = table(&[&["a"], &["A"], &["a "]]);
        let groups = RowGroups::from_table(&t);
        assert_eq!(groups.distinct_rows(), 3);
        assert_eq!(groups.duplicate_groups(), 0);
    }

    #[test]
    fn test_groups_iter_covers_all_rows() {
        let t = table(&[&["x"], &["x"], &["y"]]);
        let groups = RowGroups::from_table(&t);
        let summed: usize = groups.iter().map(|(_, n)| n).sum();
        assert_eq!(summed, groups.total_rows());
    }
}
