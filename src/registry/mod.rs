//! Registry access behind a capability boundary.
//!
//! The Windows registry is the one OS surface this tool reads, so it sits
//! behind the [`RegistryProvider`] trait: a single operation that enumerates
//! the subkeys of a scan path and resolves a display name for each. The
//! Windows implementation lives in [`windows`]; [`fake::FakeRegistry`]
//! substitutes an in-memory tree for tests and non-Windows development.

pub mod fake;
pub mod scan;
#[cfg(windows)]
pub mod windows;

pub use fake::FakeRegistry;
pub use scan::scan_columns;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Sentinel emitted when no display name could be resolved for a subkey.
pub const NAME_SENTINEL: &str = "None";

/// A top-level registry namespace root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hive {
    CurrentUser,
    LocalMachine,
}

impl Hive {
    /// The canonical `HKEY_*` prefix for this hive.
    pub fn prefix(&self) -> &'static str {
        match self {
            Hive::CurrentUser => "HKEY_CURRENT_USER",
            Hive::LocalMachine => "HKEY_LOCAL_MACHINE",
        }
    }
}

impl fmt::Display for Hive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// One registry path to scan, qualified by its hive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPath {
    pub hive: Hive,
    pub path: String,
}

impl ScanPath {
    pub fn new(hive: Hive, path: impl Into<String>) -> Self {
        Self {
            hive,
            path: path.into(),
        }
    }

    /// Hive-qualified label, used as the snapshot column header.
    pub fn qualified(&self) -> String {
        format!("{}\\{}", self.hive.prefix(), self.path)
    }
}

/// One enumerated subkey with its resolved display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub subkey: String,
    pub display_name: Option<String>,
}

impl RegistryEntry {
    /// Snapshot cell text: `<subkey> \ <display name>`, with the literal
    /// sentinel `None` when resolution failed.
    pub fn label(&self) -> String {
        format!(
            "{} \\ {}",
            self.subkey,
            self.display_name.as_deref().unwrap_or(NAME_SENTINEL)
        )
    }
}

/// Read access to an open registry key's values and children.
///
/// Both the winreg-backed key and the fake's in-memory node implement this,
/// so the display-name resolution order is defined exactly once.
pub trait KeyValues: Sized {
    /// Read a string value of this key, if present and readable.
    fn string_value(&self, name: &str) -> Option<String>;

    /// Open a direct child key, if present and readable.
    fn child(&self, name: &str) -> Option<Self>;
}

/// Resolve a display name for an installed-software subkey.
///
/// Tries `DisplayName`, then `ProductName`, then `DisplayName` inside the
/// `InstallProperties` child key. First hit wins.
pub fn resolve_display_name<K: KeyValues>(key: &K) -> Option<String> {
    key.string_value("DisplayName")
        .or_else(|| key.string_value("ProductName"))
        .or_else(|| {
            key.child("InstallProperties")
                .and_then(|props| props.string_value("DisplayName"))
        })
}

/// Enumerates installed-software entries under registry scan paths.
pub trait RegistryProvider {
    /// Enumerate the subkeys of `scan` and resolve a display name for each.
    ///
    /// At most `max_subkeys` indices are visited, bounding the enumeration
    /// even if the provider never signals exhaustion. Failures opening or
    /// reading an individual subkey skip that subkey; failure to open the
    /// scan root itself is an error.
    fn read_entries(&self, scan: &ScanPath, max_subkeys: usize) -> Result<Vec<RegistryEntry>>;
}

/// The default scan list: uninstall keys and the
/// broader SOFTWARE roots under both hives, plus the installer product lists.
pub fn default_scans() -> Vec<ScanPath> {
    use Hive::{CurrentUser, LocalMachine};

    vec![
        ScanPath::new(
            CurrentUser,
            "SOFTWARE\\WOW6432Node\\Microsoft\\Windows\\CurrentVersion\\Uninstall",
        ),
        ScanPath::new(
            LocalMachine,
            "SOFTWARE\\WOW6432Node\\Microsoft\\Windows\\CurrentVersion\\Uninstall",
        ),
        ScanPath::new(
            CurrentUser,
            "SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Uninstall",
        ),
        ScanPath::new(
            LocalMachine,
            "SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Uninstall",
        ),
        ScanPath::new(CurrentUser, "SOFTWARE\\WOW6432Node"),
        ScanPath::new(LocalMachine, "SOFTWARE\\WOW6432Node"),
        ScanPath::new(CurrentUser, "SOFTWARE"),
        ScanPath::new(LocalMachine, "SOFTWARE"),
        ScanPath::new(LocalMachine, "SOFTWARE\\Classes\\Installer\\Products"),
        ScanPath::new(
            LocalMachine,
            "SOFTWARE\\Microsoft\\Windows\\CurrentVersion\\Installer\\UserData\\S-1-5-18\\Products",
        ),
    ]
}

/// The registry provider for the current platform.
#[cfg(windows)]
pub fn platform_provider() -> Result<Box<dyn RegistryProvider>> {
    Ok(Box::new(windows::WindowsRegistry::new()))
}

/// The registry provider for the current platform.
///
/// Off Windows there is none; scanning fails with a descriptive error while
/// retention and comparison keep working on any platform.
#[cfg(not(windows))]
pub fn platform_provider() -> Result<Box<dyn RegistryProvider>> {
    Err(crate::error::RegtrackError::RegistryUnsupported {
        os: std::env::consts::OS.to_string(),
    })
}
