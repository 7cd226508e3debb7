//! Retention manager.
//!
//! Keeps today's snapshot and the single latest strictly-earlier one at the
//! top level of the snapshot folder; every other dated snapshot moves into
//! the `old` archive subfolder. Files whose stem is not a snapshot date are
//! not candidates and are never moved.

use chrono::NaiveDate;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use super::{parse_stem, ARCHIVE_DIR};
use crate::error::Result;

/// What a retention pass did.
#[derive(Debug, Default)]
pub struct RetentionReport {
    /// Dated files left at the top level (today's and the latest prior).
    pub kept: Vec<PathBuf>,

    /// Files moved into the archive subfolder.
    pub archived: Vec<PathBuf>,

    /// Files that should have been archived but could not be moved, with
    /// the failure message. Each move is independent; one failure never
    /// stops the rest.
    pub failed: Vec<(PathBuf, String)>,
}

impl RetentionReport {
    /// True when every planned move succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Apply the retention policy to `dir` for the given `today`.
///
/// Candidates are top-level `.xlsx`/`.xls` files whose stem is today's date
/// or parses as an earlier date. Today's file and the latest-dated earlier
/// file stay; the rest move to `<dir>/old/`.
fn has_spreadsheet_ext(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xls"))
}

pub fn apply_retention(dir: &Path, today: NaiveDate) -> Result<RetentionReport> {
    let mut keep: Vec<PathBuf> = Vec::new();
    let mut earlier: Vec<(NaiveDate, PathBuf)> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !has_spreadsheet_ext(&path) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
            continue;
        };
        let Some(date) = parse_stem(stem) else {
            // Not a snapshot name: never a candidate, never moved.
            continue;
        };

        if date == today {
            keep.push(path);
        } else if date < today {
            earlier.push((date, path));
        } else {
            tracing::warn!(path = %path.display(), "future-dated snapshot left in place");
        }
    }

    // Only the single latest of the strictly-earlier files survives.
    earlier.sort();
    let mut report = RetentionReport::default();
    if let Some((_, latest)) = earlier.pop() {
        keep.push(latest);
    }
    report.kept = keep;

    if earlier.is_empty() {
        return Ok(report);
    }

    let archive = dir.join(ARCHIVE_DIR);
    fs::create_dir_all(&archive)?;

    for (_, path) in earlier {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = archive.join(name);
        match fs::rename(&path, &dest) {
            Ok(()) => {
                tracing::info!(from = %path.display(), to = %dest.display(), "archived snapshot");
                report.archived.push(dest);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to archive snapshot");
                report.failed.push((path, err.to_string()));
            }
        }
    }

    Ok(report)
}
