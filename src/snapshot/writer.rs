//! Snapshot writer.
//!
//! Assembles the dated table (label column first, one data column per
//! registry path) and hands persistence to a [`SheetStore`]. Re-running for
//! the same date fully replaces that date's sheet, never appends.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use super::{snapshot_path, stem_for};
use crate::error::Result;
use crate::sheet::{Column, SheetStore, Table};

/// Write the snapshot for `date` into `dir`, one sheet named `sheet`.
///
/// Returns the path of the written workbook.
pub fn write_snapshot(
    store: &dyn SheetStore,
    dir: &Path,
    date: NaiveDate,
    sheet: &str,
    data_columns: Vec<Column>,
) -> Result<PathBuf> {
    let stem = stem_for(date);
    let path = snapshot_path(dir, date);

    let mut columns = Vec::with_capacity(data_columns.len() + 1);
    columns.push(Column::label(&stem));
    columns.extend(data_columns);

    fs::create_dir_all(dir)?;
    store.write_sheet(&path, sheet, &Table::new(columns))?;
    tracing::info!(path = %path.display(), "snapshot written");
    Ok(path)
}
