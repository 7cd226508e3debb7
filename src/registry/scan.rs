//! Drives a registry provider across the configured scan list.

use super::{RegistryEntry, RegistryProvider, ScanPath};
use crate::error::Result;
use crate::sheet::Column;

/// Read every scan path and produce one snapshot column per path.
///
/// The column header is the hive-qualified path; the values are the
/// `<subkey> \ <display name>` entry labels in enumeration order. A failure
/// to open any scan root propagates and halts the whole scan.
pub fn scan_columns(
    provider: &dyn RegistryProvider,
    scans: &[ScanPath],
    max_subkeys: usize,
) -> Result<Vec<Column>> {
    let mut columns = Vec::with_capacity(scans.len());
    for scan in scans {
        tracing::info!(path = %scan.qualified(), "reading registry path");
        let entries = provider.read_entries(scan, max_subkeys)?;
        tracing::debug!(path = %scan.qualified(), entries = entries.len(), "scan complete");
        let values = entries.iter().map(RegistryEntry::label).collect();
        columns.push(Column::new(scan.qualified(), values));
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{FakeRegistry, Hive};

    #[test]
    fn one_column_per_scan_path_with_qualified_header() {
        let hkcu = ScanPath::new(Hive::CurrentUser, "SOFTWARE");
        let hklm = ScanPath::new(Hive::LocalMachine, "SOFTWARE");

        let mut registry = FakeRegistry::new();
        registry.add_program(&hkcu, "a", Some("App A"));
        registry.add_root(&hklm);

        let columns = scan_columns(&registry, &[hkcu, hklm], 64).unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].header, "HKEY_CURRENT_USER\\SOFTWARE");
        assert_eq!(columns[0].values, vec!["a \\ App A"]);
        assert_eq!(columns[1].header, "HKEY_LOCAL_MACHINE\\SOFTWARE");
        assert!(columns[1].values.is_empty());
    }

    #[test]
    fn unopenable_root_halts_the_scan() {
        let present = ScanPath::new(Hive::CurrentUser, "SOFTWARE");
        let missing = ScanPath::new(Hive::CurrentUser, "SOFTWARE\\Absent");

        let mut registry = FakeRegistry::new();
        registry.add_program(&present, "a", None);

        assert!(scan_columns(&registry, &[present, missing], 64).is_err());
    }

    #[test]
    fn skipped_subkeys_do_not_appear_in_the_column() {
        let scan = ScanPath::new(Hive::LocalMachine, "SOFTWARE");

        let mut registry = FakeRegistry::new();
        registry.add_program(&scan, "kept", Some("Kept"));
        registry.add_unreadable(&scan, "broken");

        let columns = scan_columns(&registry, std::slice::from_ref(&scan), 64).unwrap();
        assert_eq!(columns[0].values, vec!["kept \\ Kept"]);
    }
}
