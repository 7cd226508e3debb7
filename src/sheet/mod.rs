//! Spreadsheet persistence behind a capability boundary.
//!
//! Snapshots are plain tabular text: a list of columns, each with a header
//! label and string values. The [`SheetStore`] trait covers the two
//! operations the rest of the tool needs (load a named sheet, write/replace
//! a named sheet), keeping the retention and comparison logic independent of
//! the concrete file format. [`xlsx::XlsxStore`] is the real store;
//! [`memory::MemorySheetStore`] backs tests.

pub mod memory;
pub mod xlsx;

pub use memory::MemorySheetStore;
pub use xlsx::XlsxStore;

use std::path::Path;

use crate::error::Result;

/// One spreadsheet column: a header label and its cell values, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub values: Vec<String>,
}

impl Column {
    pub fn new(header: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            header: header.into(),
            values,
        }
    }

    /// A column with a header and no values (the snapshot date label).
    pub fn label(header: impl Into<String>) -> Self {
        Self::new(header, Vec::new())
    }
}

/// A single sheet's contents as ordered columns of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Column header labels in sheet order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.header.as_str())
    }

    /// Look up a column by its header label.
    pub fn column(&self, header: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.header == header)
    }
}

/// Load and persist named sheets of tabular text.
pub trait SheetStore {
    /// Load the named sheet of the workbook at `path`.
    ///
    /// All cells are read as text; blank cells and header-less columns are
    /// dropped. Fails if the workbook or the sheet does not exist.
    fn load_sheet(&self, path: &Path, sheet: &str) -> Result<Table>;

    /// Write the named sheet of the workbook at `path`, creating the
    /// workbook if needed and fully replacing the sheet if it already
    /// exists. Other sheets in an existing workbook are left untouched.
    fn write_sheet(&self, path: &Path, sheet: &str, table: &Table) -> Result<()>;
}
