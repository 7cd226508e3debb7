//! Configuration loading.
//!
//! Everything tunable lives in [`RegtrackConfig`]: the
//! snapshot folder, the sheet name, the display-width budget, the subkey
//! enumeration bound, and the registry scan list. Values come from an
//! optional YAML file (`regtrack.yml` in the working directory, or a path
//! given with `--config`), with built-in defaults. The CLI's `--dir` flag
//! overrides the snapshot folder last.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RegtrackError, Result};
use crate::registry::{default_scans, ScanPath};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "regtrack.yml";

/// Tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegtrackConfig {
    /// Folder holding the dated snapshot files and the `old` archive.
    pub snapshot_dir: PathBuf,

    /// Sheet name written into and read from every snapshot workbook.
    pub sheet_name: String,

    /// Display budget for column widths, in default-width screen columns.
    pub screen_columns: u32,

    /// Upper bound on subkey enumeration per registry path.
    pub max_subkeys: usize,

    /// Registry paths scanned into the snapshot, one column each.
    pub scans: Vec<ScanPath>,
}

impl Default for RegtrackConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from("."),
            sheet_name: "data".to_string(),
            screen_columns: 29,
            max_subkeys: 4096,
            scans: default_scans(),
        }
    }
}

impl RegtrackConfig {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist; otherwise `regtrack.yml`
    /// in the working directory is used if present, and built-in defaults
    /// if not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(RegtrackError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::from_file(path)
            }
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading config file");
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| RegtrackError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply the CLI `--dir` override.
    pub fn with_dir_override(mut self, dir: Option<&Path>) -> Self {
        if let Some(dir) = dir {
            self.snapshot_dir = dir.to_path_buf();
        }
        self
    }
}
