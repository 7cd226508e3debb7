//! winreg-backed registry provider.
//!
//! Only compiled on Windows. Read-only access throughout: roots are opened
//! with `KEY_READ` and every handle is dropped as soon as its subkey has
//! been resolved.

use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ};
use winreg::{RegKey, HKEY};

use super::{resolve_display_name, Hive, KeyValues, RegistryEntry, RegistryProvider, ScanPath};
use crate::error::{RegtrackError, Result};

fn hkey(hive: Hive) -> HKEY {
    match hive {
        Hive::CurrentUser => HKEY_CURRENT_USER,
        Hive::LocalMachine => HKEY_LOCAL_MACHINE,
    }
}

/// Read-only view of an open registry key.
struct WinKey(RegKey);

impl KeyValues for WinKey {
    fn string_value(&self, name: &str) -> Option<String> {
        self.0.get_value::<String, _>(name).ok()
    }

    fn child(&self, name: &str) -> Option<Self> {
        self.0.open_subkey_with_flags(name, KEY_READ).ok().map(WinKey)
    }
}

/// [`RegistryProvider`] backed by the live Windows registry.
#[derive(Debug, Default)]
pub struct WindowsRegistry;

impl WindowsRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl RegistryProvider for WindowsRegistry {
    fn read_entries(&self, scan: &ScanPath, max_subkeys: usize) -> Result<Vec<RegistryEntry>> {
        let root = RegKey::predef(hkey(scan.hive));
        let key = root
            .open_subkey_with_flags(&scan.path, KEY_READ)
            .map_err(|err| RegtrackError::RegistryOpen {
                hive: scan.hive.prefix().to_string(),
                path: scan.path.clone(),
                message: err.to_string(),
            })?;

        let mut entries = Vec::new();
        for name in key.enum_keys().take(max_subkeys) {
            let name = match name {
                Ok(name) => name,
                Err(err) => {
                    // Transient enumeration error at this index; the iterator
                    // already terminates on "no more data".
                    tracing::debug!(path = %scan.path, error = %err, "skipping enumeration error");
                    continue;
                }
            };

            match key.open_subkey_with_flags(&name, KEY_READ) {
                Ok(subkey) => entries.push(RegistryEntry {
                    display_name: resolve_display_name(&WinKey(subkey)),
                    subkey: name,
                }),
                Err(err) => {
                    tracing::debug!(subkey = %name, error = %err, "skipping unreadable subkey");
                }
            }
        }
        Ok(entries)
    }
}
