//! In-memory sheet store.
//!
//! Keeps workbooks in a map keyed by path, which lets the comparison logic
//! be tested without touching the xlsx format at all.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{SheetStore, Table};
use crate::error::{RegtrackError, Result};

/// [`SheetStore`] over an in-memory map of workbooks.
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    books: RefCell<HashMap<PathBuf, HashMap<String, Table>>>,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a sheet directly, bypassing `write_sheet`.
    pub fn insert(&self, path: impl Into<PathBuf>, sheet: &str, table: Table) {
        self.books
            .borrow_mut()
            .entry(path.into())
            .or_default()
            .insert(sheet.to_string(), table);
    }

    /// Number of workbooks held.
    pub fn len(&self) -> usize {
        self.books.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.borrow().is_empty()
    }
}

impl SheetStore for MemorySheetStore {
    fn load_sheet(&self, path: &Path, sheet: &str) -> Result<Table> {
        let books = self.books.borrow();
        let book = books.get(path).ok_or_else(|| RegtrackError::WorkbookRead {
            path: path.to_path_buf(),
            message: "workbook not found".to_string(),
        })?;
        book.get(sheet)
            .cloned()
            .ok_or_else(|| RegtrackError::SheetMissing {
                path: path.to_path_buf(),
                sheet: sheet.to_string(),
            })
    }

    fn write_sheet(&self, path: &Path, sheet: &str, table: &Table) -> Result<()> {
        self.insert(path, sheet, table.clone());
        Ok(())
    }
}
