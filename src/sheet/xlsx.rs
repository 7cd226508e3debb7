//! xlsx-backed sheet store.
//!
//! Uses umya-spreadsheet so an existing workbook can be loaded, have one
//! sheet replaced, and be saved with its other sheets intact. All cells are
//! written and read as plain text; the only formatting applied is the even
//! column-width split.

use std::path::Path;

use umya_spreadsheet::helper::coordinate::string_from_column_index;
use umya_spreadsheet::{reader, writer, Spreadsheet, Worksheet};

use super::{Column, SheetStore, Table};
use crate::error::{RegtrackError, Result};

/// Excel's default column width in character units.
const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// [`SheetStore`] over `.xlsx` workbooks.
#[derive(Debug, Clone)]
pub struct XlsxStore {
    /// Total display budget, in default-width screen columns, split evenly
    /// across the columns actually written.
    screen_columns: u32,
}

impl Default for XlsxStore {
    fn default() -> Self {
        Self::new(29)
    }
}

impl XlsxStore {
    pub fn new(screen_columns: u32) -> Self {
        Self { screen_columns }
    }

    fn read_workbook(&self, path: &Path) -> Result<Spreadsheet> {
        reader::xlsx::read(path).map_err(|err| RegtrackError::WorkbookRead {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    fn fill_sheet(&self, sheet: &mut Worksheet, table: &Table) {
        for (col_index, column) in table.columns.iter().enumerate() {
            let col = col_index as u32 + 1;
            sheet.get_cell_mut((col, 1)).set_value_string(&column.header);
            for (row_index, value) in column.values.iter().enumerate() {
                let row = row_index as u32 + 2;
                sheet.get_cell_mut((col, row)).set_value_string(value);
            }
        }

        // Widths are independent of content length: the fixed display budget
        // divided by the number of written columns.
        let count = table.columns.len() as u32;
        if count > 0 {
            let width = f64::from(self.screen_columns) * DEFAULT_COLUMN_WIDTH / f64::from(count);
            for col in 1..=count {
                let letter = string_from_column_index(&col);
                sheet.get_column_dimension_mut(&letter).set_width(width);
            }
        }
    }
}

impl SheetStore for XlsxStore {
    fn load_sheet(&self, path: &Path, sheet: &str) -> Result<Table> {
        let book = self.read_workbook(path)?;
        let worksheet = book
            .get_sheet_by_name(sheet)
            .ok_or_else(|| RegtrackError::SheetMissing {
                path: path.to_path_buf(),
                sheet: sheet.to_string(),
            })?;

        let max_col = worksheet.get_highest_column();
        let max_row = worksheet.get_highest_row();

        let mut columns = Vec::new();
        for col in 1..=max_col {
            let header = worksheet.get_value((col, 1));
            if header.is_empty() {
                continue;
            }
            let mut values = Vec::new();
            for row in 2..=max_row {
                let value = worksheet.get_value((col, row));
                if !value.is_empty() {
                    values.push(value);
                }
            }
            columns.push(Column::new(header, values));
        }
        Ok(Table::new(columns))
    }

    fn write_sheet(&self, path: &Path, sheet: &str, table: &Table) -> Result<()> {
        let mut book = if path.exists() {
            let mut book = self.read_workbook(path)?;
            if book.get_sheet_by_name(sheet).is_some() {
                tracing::debug!(%sheet, "replacing existing sheet");
                book.remove_sheet_by_name(sheet)
                    .map_err(|err| RegtrackError::WorkbookWrite {
                        path: path.to_path_buf(),
                        message: err.to_string(),
                    })?;
            }
            book
        } else {
            umya_spreadsheet::new_file_empty_worksheet()
        };

        let worksheet =
            book.new_sheet(sheet)
                .map_err(|err| RegtrackError::WorkbookWrite {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })?;
        self.fill_sheet(worksheet, table);

        writer::xlsx::write(&book, path).map_err(|err| RegtrackError::WorkbookWrite {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_table(stem: &str) -> Table {
        Table::new(vec![
            Column::label(stem),
            Column::new("Apps", vec!["a \\ App A".into(), "b \\ App B".into()]),
        ])
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2024-01-01.xlsx");
        let store = XlsxStore::default();

        store
            .write_sheet(&path, "data", &sample_table("2024-01-01"))
            .unwrap();

        let table = store.load_sheet(&path, "data").unwrap();
        assert_eq!(
            table.headers().collect::<Vec<_>>(),
            vec!["2024-01-01", "Apps"]
        );
        assert_eq!(
            table.column("Apps").unwrap().values,
            vec!["a \\ App A", "b \\ App B"]
        );
    }

    #[test]
    fn rewrite_fully_replaces_sheet_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2024-01-01.xlsx");
        let store = XlsxStore::default();

        store
            .write_sheet(
                &path,
                "data",
                &Table::new(vec![Column::new(
                    "Apps",
                    vec!["stale-1".into(), "stale-2".into(), "stale-3".into()],
                )]),
            )
            .unwrap();
        store
            .write_sheet(
                &path,
                "data",
                &Table::new(vec![Column::new("Apps", vec!["fresh".into()])]),
            )
            .unwrap();

        let table = store.load_sheet(&path, "data").unwrap();
        assert_eq!(table.column("Apps").unwrap().values, vec!["fresh"]);
    }

    #[test]
    fn writing_new_sheet_leaves_other_sheets_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2024-01-01.xlsx");
        let store = XlsxStore::default();

        store
            .write_sheet(&path, "notes", &sample_table("2024-01-01"))
            .unwrap();
        store
            .write_sheet(&path, "data", &sample_table("2024-01-01"))
            .unwrap();

        assert!(store.load_sheet(&path, "notes").is_ok());
        assert!(store.load_sheet(&path, "data").is_ok());
    }

    #[test]
    fn missing_sheet_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2024-01-01.xlsx");
        let store = XlsxStore::default();

        store
            .write_sheet(&path, "data", &sample_table("2024-01-01"))
            .unwrap();

        let err = store.load_sheet(&path, "nope").unwrap_err();
        assert!(matches!(err, RegtrackError::SheetMissing { .. }));
    }

    #[test]
    fn missing_workbook_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.xlsx");

        let err = XlsxStore::default().load_sheet(&path, "data").unwrap_err();
        assert!(matches!(err, RegtrackError::WorkbookRead { .. }));
    }

    #[test]
    fn blank_cells_are_dropped_on_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2024-01-01.xlsx");
        let store = XlsxStore::default();

        store
            .write_sheet(
                &path,
                "data",
                &Table::new(vec![
                    Column::new("Apps", vec!["a".into(), String::new(), "b".into()]),
                    Column::new("Else", vec!["x".into()]),
                ]),
            )
            .unwrap();

        let table = store.load_sheet(&path, "data").unwrap();
        assert_eq!(table.column("Apps").unwrap().values, vec!["a", "b"]);
    }

    #[test]
    fn column_widths_split_the_display_budget() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("2024-01-01.xlsx");

        // Two columns written: each gets (29 * 8.43) / 2.
        XlsxStore::new(29)
            .write_sheet(&path, "data", &sample_table("2024-01-01"))
            .unwrap();

        let book = reader::xlsx::read(&path).unwrap();
        let sheet = book.get_sheet_by_name("data").unwrap();
        let width = *sheet.get_column_dimension("A").unwrap().get_width();
        assert!((width - 29.0 * 8.43 / 2.0).abs() < 1e-6);
    }
}
