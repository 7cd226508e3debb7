//! Column- and value-level snapshot diffing.
//!
//! Pure set logic over two [`Table`]s. Values are compared as sets per
//! column: blanks and duplicates are ignored and row order is irrelevant.
//! The result is structured (and serializable) so callers can test it or
//! emit JSON instead of scraping printed text.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::sheet::Table;

/// Value-level changes within one column present in both snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnChange {
    pub column: String,
    /// Values present in the older snapshot only.
    pub removed: Vec<String>,
    /// Values present in the newer snapshot only.
    pub added: Vec<String>,
}

/// Differences between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotDiff {
    /// File name of the older snapshot.
    pub older: String,
    /// File name of the newer snapshot.
    pub newer: String,
    /// Column labels present in the older snapshot only.
    pub removed_columns: Vec<String>,
    /// Column labels present in the newer snapshot only.
    pub added_columns: Vec<String>,
    /// Per-column value changes, across the union of columns.
    pub changes: Vec<ColumnChange>,
}

impl SnapshotDiff {
    /// True when the two snapshots have identical column and value sets.
    pub fn is_empty(&self) -> bool {
        self.removed_columns.is_empty() && self.added_columns.is_empty() && self.changes.is_empty()
    }

    /// Human-readable report, one line per difference.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=========== Comparing {} to {} ===========",
            self.older, self.newer
        );

        for column in &self.removed_columns {
            let _ = writeln!(out, "- Column removed: {column}");
        }
        for column in &self.added_columns {
            let _ = writeln!(out, "+ Column added: {column}");
        }

        for change in &self.changes {
            let _ = writeln!(out, "\nChanges in column: {}", change.column);
            for value in &change.removed {
                let _ = writeln!(out, "- {}: {}", change.column, value);
            }
            for value in &change.added {
                let _ = writeln!(out, "+ {}: {}", change.column, value);
            }
        }

        if self.is_empty() {
            let _ = writeln!(out, "No differences found");
        }
        out
    }
}

fn value_set(table: &Table, column: &str) -> BTreeSet<String> {
    table
        .column(column)
        .map(|c| {
            c.values
                .iter()
                .filter(|v| !v.is_empty())
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

/// Compute the diff between an older and a newer snapshot table.
///
/// All output is sorted so the report is deterministic regardless of the
/// row and column order in the workbooks.
pub fn diff_tables(older_name: &str, newer_name: &str, older: &Table, newer: &Table) -> SnapshotDiff {
    let old_columns: BTreeSet<&str> = older.headers().collect();
    let new_columns: BTreeSet<&str> = newer.headers().collect();

    let removed_columns = old_columns
        .difference(&new_columns)
        .map(|c| c.to_string())
        .collect();
    let added_columns = new_columns
        .difference(&old_columns)
        .map(|c| c.to_string())
        .collect();

    // Value sets are diffed across the union of columns: a column present on
    // one side only contributes all of its values to that direction.
    let mut changes = Vec::new();
    for column in old_columns.union(&new_columns) {
        let old_values = value_set(older, column);
        let new_values = value_set(newer, column);

        let removed: Vec<String> = old_values.difference(&new_values).cloned().collect();
        let added: Vec<String> = new_values.difference(&old_values).cloned().collect();

        if !removed.is_empty() || !added.is_empty() {
            changes.push(ColumnChange {
                column: column.to_string(),
                removed,
                added,
            });
        }
    }

    SnapshotDiff {
        older: older_name.to_string(),
        newer: newer_name.to_string(),
        removed_columns,
        added_columns,
        changes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Column;

    fn table(columns: &[(&str, &[&str])]) -> Table {
        Table::new(
            columns
                .iter()
                .map(|(h, vs)| Column::new(*h, vs.iter().map(|v| v.to_string()).collect()))
                .collect(),
        )
    }

    #[test]
    fn worked_example_app_a_removed_c_added() {
        // 2024-01-01: App = {A, B}; 2024-01-02: App = {B, C}.
        let older = table(&[("App", &["A", "B"])]);
        let newer = table(&[("App", &["B", "C"])]);

        let diff = diff_tables("2024-01-01.xlsx", "2024-01-02.xlsx", &older, &newer);

        assert!(diff.removed_columns.is_empty());
        assert!(diff.added_columns.is_empty());
        assert_eq!(
            diff.changes,
            vec![ColumnChange {
                column: "App".into(),
                removed: vec!["A".into()],
                added: vec!["C".into()],
            }]
        );
    }

    #[test]
    fn added_column_reports_both_the_column_and_its_values() {
        let older = table(&[("App", &["v"])]);
        let newer = table(&[("App", &["v"]), ("X", &["v"])]);

        let diff = diff_tables("a.xlsx", "b.xlsx", &older, &newer);

        assert_eq!(diff.added_columns, vec!["X"]);
        assert!(diff.removed_columns.is_empty());
        assert_eq!(
            diff.changes,
            vec![ColumnChange {
                column: "X".into(),
                removed: vec![],
                added: vec!["v".into()],
            }]
        );

        let rendered = diff.render();
        assert!(rendered.contains("+ Column added: X"));
        assert!(rendered.contains("+ X: v"));
    }

    #[test]
    fn removed_column_is_reported() {
        let older = table(&[("App", &["v"]), ("Gone", &["v"])]);
        let newer = table(&[("App", &["v"])]);

        let diff = diff_tables("a.xlsx", "b.xlsx", &older, &newer);
        assert_eq!(diff.removed_columns, vec!["Gone"]);
        assert_eq!(diff.changes[0].removed, vec!["v"]);

        let rendered = diff.render();
        assert!(rendered.contains("- Column removed: Gone"));
        assert!(rendered.contains("- Gone: v"));
    }

    #[test]
    fn identical_snapshots_produce_no_lines() {
        let older = table(&[("App", &["A", "B"]), ("Drivers", &["d1"])]);
        let newer = table(&[("App", &["B", "A"]), ("Drivers", &["d1"])]);

        let diff = diff_tables("a.xlsx", "b.xlsx", &older, &newer);
        assert!(diff.is_empty());

        let rendered = diff.render();
        assert!(!rendered.contains("+ "));
        assert!(!rendered.contains("- "));
        assert!(rendered.contains("No differences found"));
    }

    #[test]
    fn duplicates_and_blanks_are_ignored() {
        let older = table(&[("App", &["A", "A", ""])]);
        let newer = table(&[("App", &["A"])]);

        let diff = diff_tables("a.xlsx", "b.xlsx", &older, &newer);
        assert!(diff.is_empty());
    }

    #[test]
    fn output_is_sorted_and_deterministic() {
        let older = table(&[("App", &["z", "m", "a"])]);
        let newer = table(&[("App", &["q", "b"])]);

        let diff = diff_tables("a.xlsx", "b.xlsx", &older, &newer);
        assert_eq!(diff.changes[0].removed, vec!["a", "m", "z"]);
        assert_eq!(diff.changes[0].added, vec!["b", "q"]);
    }

    #[test]
    fn rendered_lines_follow_the_report_format() {
        let older = table(&[("App", &["A", "B"])]);
        let newer = table(&[("App", &["B", "C"])]);

        let rendered = diff_tables("2024-01-01.xlsx", "2024-01-02.xlsx", &older, &newer).render();
        assert!(rendered
            .contains("=========== Comparing 2024-01-01.xlsx to 2024-01-02.xlsx ==========="));
        assert!(rendered.contains("Changes in column: App"));
        assert!(rendered.contains("- App: A"));
        assert!(rendered.contains("+ App: C"));
    }

    #[test]
    fn diff_serializes_to_json() {
        let older = table(&[("App", &["A"])]);
        let newer = table(&[("App", &["B"])]);

        let diff = diff_tables("a.xlsx", "b.xlsx", &older, &newer);
        let json = serde_json::to_string(&diff).unwrap();
        assert!(json.contains("\"removed\":[\"A\"]"));
        assert!(json.contains("\"added\":[\"B\"]"));
    }
}
