//! regtrack - Daily installed-software registry snapshots with retention
//! and diffing.
//!
//! regtrack walks a configured list of Windows registry paths, writes the
//! resulting installed-software inventory to a dated spreadsheet, keeps only
//! the newest and second-newest snapshots in the working folder, and reports
//! the column- and value-level differences between the two.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and defaults
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Registry scanning behind a provider trait
//! - [`sheet`] - Tabular spreadsheet persistence behind a store trait
//! - [`snapshot`] - Snapshot naming, retention, and comparison
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use regtrack::sheet::{Column, Table};
//! use regtrack::snapshot::diff_tables;
//!
//! let older = Table::new(vec![Column::new("App", vec!["A".into(), "B".into()])]);
//! let newer = Table::new(vec![Column::new("App", vec!["B".into(), "C".into()])]);
//!
//! let diff = diff_tables("2024-01-01.xlsx", "2024-01-02.xlsx", &older, &newer);
//! assert_eq!(diff.changes[0].removed, vec!["A"]);
//! assert_eq!(diff.changes[0].added, vec!["C"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod sheet;
pub mod snapshot;
pub mod ui;

pub use error::{RegtrackError, Result};
