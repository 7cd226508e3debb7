//! In-memory registry provider.
//!
//! [`FakeRegistry`] backs the scanner with a hand-built key tree, which is
//! how the scan and snapshot logic is exercised in tests and on non-Windows
//! hosts. Subkeys can be marked unreadable to simulate the per-subkey access
//! failures the scanner is required to skip.

use std::collections::HashMap;

use super::{resolve_display_name, Hive, KeyValues, RegistryEntry, RegistryProvider, ScanPath};
use crate::error::{RegtrackError, Result};

/// An in-memory registry key: string values plus child keys.
#[derive(Debug, Clone, Default)]
pub struct FakeKey {
    values: HashMap<String, String>,
    children: HashMap<String, FakeKey>,
}

impl FakeKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a string value on this key.
    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    /// Builder: attach a child key.
    pub fn with_child(mut self, name: &str, child: FakeKey) -> Self {
        self.children.insert(name.to_string(), child);
        self
    }
}

impl KeyValues for FakeKey {
    fn string_value(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn child(&self, name: &str) -> Option<Self> {
        self.children.get(name).cloned()
    }
}

#[derive(Debug, Clone)]
struct FakeSubkey {
    name: String,
    key: FakeKey,
    readable: bool,
}

/// In-memory [`RegistryProvider`] implementation.
#[derive(Debug, Default)]
pub struct FakeRegistry {
    roots: HashMap<(Hive, String), Vec<FakeSubkey>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a scan root exists, even with no subkeys.
    pub fn add_root(&mut self, scan: &ScanPath) {
        self.roots
            .entry((scan.hive, scan.path.clone()))
            .or_default();
    }

    /// Add a subkey with a full key tree under a scan root.
    pub fn add_subkey(&mut self, scan: &ScanPath, name: &str, key: FakeKey) {
        self.roots
            .entry((scan.hive, scan.path.clone()))
            .or_default()
            .push(FakeSubkey {
                name: name.to_string(),
                key,
                readable: true,
            });
    }

    /// Add an installed program the common way: a subkey whose `DisplayName`
    /// value holds the name, or no values at all.
    pub fn add_program(&mut self, scan: &ScanPath, subkey: &str, display_name: Option<&str>) {
        let key = match display_name {
            Some(name) => FakeKey::new().with_value("DisplayName", name),
            None => FakeKey::new(),
        };
        self.add_subkey(scan, subkey, key);
    }

    /// Add a subkey that fails to open, as an unreadable entry would on a
    /// real registry. The scanner must skip it.
    pub fn add_unreadable(&mut self, scan: &ScanPath, name: &str) {
        self.roots
            .entry((scan.hive, scan.path.clone()))
            .or_default()
            .push(FakeSubkey {
                name: name.to_string(),
                key: FakeKey::new(),
                readable: false,
            });
    }
}

impl RegistryProvider for FakeRegistry {
    fn read_entries(&self, scan: &ScanPath, max_subkeys: usize) -> Result<Vec<RegistryEntry>> {
        let subkeys = self.roots.get(&(scan.hive, scan.path.clone())).ok_or_else(|| {
            RegtrackError::RegistryOpen {
                hive: scan.hive.prefix().to_string(),
                path: scan.path.clone(),
                message: "The system cannot find the file specified".to_string(),
            }
        })?;

        let mut entries = Vec::new();
        for subkey in subkeys.iter().take(max_subkeys) {
            if !subkey.readable {
                tracing::debug!(subkey = %subkey.name, "skipping unreadable subkey");
                continue;
            }
            entries.push(RegistryEntry {
                subkey: subkey.name.clone(),
                display_name: resolve_display_name(&subkey.key),
            });
        }
        Ok(entries)
    }
}
