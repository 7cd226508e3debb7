//! Snapshot pair location and comparison.
//!
//! Finds the two dated snapshot files retention leaves behind, orders them
//! by their parsed dates (oldest first), loads both sheets, and computes the
//! structured diff. Ordering compares the dates numerically; it does not
//! depend on what "today" is, so a stale pair still compares correctly.

use chrono::NaiveDate;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use super::diff::{diff_tables, SnapshotDiff};
use super::{parse_stem, stem_for};
use crate::error::{RegtrackError, Result};
use crate::sheet::{SheetStore, Table};

/// A located snapshot file with its parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    pub path: PathBuf,
    pub date: NaiveDate,
}

impl SnapshotFile {
    /// The bare file name, used in the report header.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Find exactly two `YYYY-MM-DD.xlsx` files in `dir`, ordered (older, newer).
///
/// Any other count is a configuration error: retention is expected to have
/// left precisely today's file and the latest prior one.
pub fn find_snapshot_pair(dir: &Path) -> Result<(SnapshotFile, SnapshotFile)> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension() != Some(OsStr::new("xlsx")) {
            continue;
        }
        let Some(date) = path
            .file_stem()
            .and_then(OsStr::to_str)
            .and_then(parse_stem)
        else {
            continue;
        };
        found.push(SnapshotFile { path, date });
    }

    if found.len() != 2 {
        return Err(RegtrackError::SnapshotCount {
            dir: dir.to_path_buf(),
            found: found.len(),
        });
    }

    found.sort_by_key(|s| s.date);
    let newer = found.pop().expect("two entries");
    let older = found.pop().expect("two entries");
    Ok((older, newer))
}

/// Load a snapshot's data table, dropping its leading run-date label column.
fn load_data_table(store: &dyn SheetStore, snapshot: &SnapshotFile, sheet: &str) -> Result<Table> {
    let mut table = store.load_sheet(&snapshot.path, sheet)?;
    let stem = stem_for(snapshot.date);
    if table.columns.first().is_some_and(|c| c.header == stem) {
        table.columns.remove(0);
    }
    Ok(table)
}

/// Compare the two snapshot files in `dir` and return the structured diff.
pub fn compare_folder(store: &dyn SheetStore, dir: &Path, sheet: &str) -> Result<SnapshotDiff> {
    let (older, newer) = find_snapshot_pair(dir)?;
    tracing::info!(
        older = %older.file_name(),
        newer = %newer.file_name(),
        "comparing snapshots"
    );

    let older_table = load_data_table(store, &older, sheet)?;
    let newer_table = load_data_table(store, &newer, sheet)?;

    Ok(diff_tables(
        &older.file_name(),
        &newer.file_name(),
        &older_table,
        &newer_table,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{Column, MemorySheetStore};
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn pair_is_ordered_by_date_not_directory_order() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "2024-01-02.xlsx");
        touch(temp.path(), "2024-01-01.xlsx");

        let (older, newer) = find_snapshot_pair(temp.path()).unwrap();
        assert_eq!(older.file_name(), "2024-01-01.xlsx");
        assert_eq!(newer.file_name(), "2024-01-02.xlsx");
    }

    #[test]
    fn stale_pair_still_orders_numerically() {
        // Neither file is "today"; ordering must not care.
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "2021-12-31.xlsx");
        touch(temp.path(), "2022-01-01.xlsx");

        let (older, newer) = find_snapshot_pair(temp.path()).unwrap();
        assert_eq!(older.date, NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
        assert_eq!(newer.date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
    }

    #[test]
    fn wrong_file_count_is_a_configuration_error() {
        let temp = TempDir::new().unwrap();

        // Zero files.
        let err = find_snapshot_pair(temp.path()).unwrap_err();
        assert!(matches!(err, RegtrackError::SnapshotCount { found: 0, .. }));

        // One file.
        touch(temp.path(), "2024-01-01.xlsx");
        let err = find_snapshot_pair(temp.path()).unwrap_err();
        assert!(matches!(err, RegtrackError::SnapshotCount { found: 1, .. }));

        // Three files.
        touch(temp.path(), "2024-01-02.xlsx");
        touch(temp.path(), "2024-01-03.xlsx");
        let err = find_snapshot_pair(temp.path()).unwrap_err();
        assert!(matches!(err, RegtrackError::SnapshotCount { found: 3, .. }));
    }

    #[test]
    fn non_snapshot_files_do_not_count() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "2024-01-01.xlsx");
        touch(temp.path(), "2024-01-02.xlsx");
        touch(temp.path(), "notes.xlsx");
        touch(temp.path(), "2024-01-03.xls");

        assert!(find_snapshot_pair(temp.path()).is_ok());
    }

    #[test]
    fn compare_folder_reports_value_changes() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "2024-01-01.xlsx");
        touch(temp.path(), "2024-01-02.xlsx");

        let store = MemorySheetStore::new();
        store.insert(
            temp.path().join("2024-01-01.xlsx"),
            "data",
            Table::new(vec![
                Column::label("2024-01-01"),
                Column::new("App", vec!["A".into(), "B".into()]),
            ]),
        );
        store.insert(
            temp.path().join("2024-01-02.xlsx"),
            "data",
            Table::new(vec![
                Column::label("2024-01-02"),
                Column::new("App", vec!["B".into(), "C".into()]),
            ]),
        );

        let diff = compare_folder(&store, temp.path(), "data").unwrap();

        // The per-file date label columns are excluded: no column noise.
        assert!(diff.removed_columns.is_empty());
        assert!(diff.added_columns.is_empty());
        assert_eq!(diff.changes.len(), 1);
        assert_eq!(diff.changes[0].removed, vec!["A"]);
        assert_eq!(diff.changes[0].added, vec!["C"]);
    }

    #[test]
    fn compare_folder_surfaces_precondition_before_loading() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "2024-01-01.xlsx");

        // The store is empty; if comparison tried to load anything it would
        // fail with a read error instead of the count error.
        let store = MemorySheetStore::new();
        let err = compare_folder(&store, temp.path(), "data").unwrap_err();
        assert!(matches!(err, RegtrackError::SnapshotCount { found: 1, .. }));
    }
}
