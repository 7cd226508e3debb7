//! Snapshot naming, retention, and comparison.
//!
//! This is the part of the tool with actual logic. A snapshot is a dated
//! workbook named `YYYY-MM-DD.xlsx`; the name is load-bearing for both the
//! retention policy ([`retention`]) and the pair comparison ([`compare`]).

pub mod compare;
pub mod diff;
pub mod retention;
pub mod writer;

pub use compare::{compare_folder, find_snapshot_pair, SnapshotFile};
pub use diff::{diff_tables, ColumnChange, SnapshotDiff};
pub use retention::{apply_retention, RetentionReport};
pub use writer::write_snapshot;

use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Archive subfolder that retention moves superseded snapshots into.
pub const ARCHIVE_DIR: &str = "old";

static RE_SNAPSHOT_STEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Parse a file stem as a snapshot date.
///
/// Only zero-padded `YYYY-MM-DD` stems count; anything else is not a
/// snapshot name and must never be touched by retention.
pub fn parse_stem(stem: &str) -> Option<NaiveDate> {
    if !RE_SNAPSHOT_STEM.is_match(stem) {
        return None;
    }
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// The file stem for a snapshot date.
pub fn stem_for(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Full path of the snapshot file for `date` in `dir`.
pub fn snapshot_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}.xlsx", stem_for(date)))
}

/// Today's date in local time, the stem every run is keyed by.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stem_accepts_padded_dates() {
        assert_eq!(
            parse_stem("2024-01-02"),
            Some(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        );
    }

    #[test]
    fn parse_stem_rejects_unpadded_and_garbage() {
        assert_eq!(parse_stem("2024-1-2"), None);
        assert_eq!(parse_stem("notes"), None);
        assert_eq!(parse_stem("2024-01-02-final"), None);
        assert_eq!(parse_stem(""), None);
    }

    #[test]
    fn parse_stem_rejects_impossible_dates() {
        // Matches the shape but is not a calendar date.
        assert_eq!(parse_stem("2024-13-40"), None);
    }

    #[test]
    fn stem_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(stem_for(date), "2024-01-02");
        assert_eq!(parse_stem(&stem_for(date)), Some(date));
    }

    #[test]
    fn snapshot_path_uses_xlsx_extension() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let path = snapshot_path(Path::new("/snap"), date);
        assert_eq!(path, PathBuf::from("/snap/2024-01-02.xlsx"));
    }
}
