//! Error types for regtrack operations.
//!
//! This module defines [`RegtrackError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RegtrackError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RegtrackError::Other`) for unexpected errors
//! - There are no retries anywhere: registry root-open failures, workbook I/O
//!   failures, and comparator precondition failures all propagate and halt
//!   the run. Only per-subkey registry reads are tolerated and skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for regtrack operations.
#[derive(Debug, Error)]
pub enum RegtrackError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to open a registry scan root. Fatal for the whole run.
    #[error("Failed to open registry path {hive}\\{path}: {message}")]
    RegistryOpen {
        hive: String,
        path: String,
        message: String,
    },

    /// Registry access is not available on this platform.
    #[error("Registry scanning requires Windows (running on {os})")]
    RegistryUnsupported { os: String },

    /// A workbook exists but does not contain the expected sheet.
    #[error("Sheet '{sheet}' not found in {path}")]
    SheetMissing { path: PathBuf, sheet: String },

    /// Failed to read a workbook from disk.
    #[error("Failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },

    /// Failed to write a workbook to disk.
    #[error("Failed to write workbook {path}: {message}")]
    WorkbookWrite { path: PathBuf, message: String },

    /// The comparator needs exactly two dated snapshot files.
    #[error(
        "Folder {dir} must contain exactly two snapshot files named YYYY-MM-DD.xlsx (found {found})"
    )]
    SnapshotCount { dir: PathBuf, found: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RegtrackError {
    /// Exit code this error maps to.
    ///
    /// Configuration and precondition problems exit with 2 so scripts can
    /// tell them apart from operational failures (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::SnapshotCount { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for regtrack operations.
pub type Result<T> = std::result::Result<T, RegtrackError>;
