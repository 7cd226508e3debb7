//! Snapshot command implementation.
//!
//! The `regtrack snapshot` command scans the configured registry paths and
//! writes the dated workbook.

use crate::cli::args::SnapshotArgs;
use crate::config::RegtrackConfig;
use crate::error::Result;
use crate::registry::{platform_provider, scan_columns};
use crate::sheet::XlsxStore;
use crate::snapshot::{today, write_snapshot};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The snapshot command implementation.
pub struct SnapshotCommand {
    config: RegtrackConfig,
    args: SnapshotArgs,
}

impl SnapshotCommand {
    /// Create a new snapshot command.
    pub fn new(config: RegtrackConfig, args: SnapshotArgs) -> Self {
        Self { config, args }
    }
}

impl Command for SnapshotCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let provider = platform_provider()?;
        let date = self.args.date.unwrap_or_else(today);

        out.println(&format!(
            "Scanning {} registry paths...",
            self.config.scans.len()
        ));
        for scan in &self.config.scans {
            out.detail(&format!("  {}", scan.qualified()));
        }

        let columns = scan_columns(provider.as_ref(), &self.config.scans, self.config.max_subkeys)?;
        let entries: usize = columns.iter().map(|c| c.values.len()).sum();

        let store = XlsxStore::new(self.config.screen_columns);
        let path = write_snapshot(
            &store,
            &self.config.snapshot_dir,
            date,
            &self.config.sheet_name,
            columns,
        )?;

        out.success(&format!(
            "Snapshot written: {} ({} entries)",
            path.display(),
            entries
        ));
        Ok(CommandResult::success())
    }
}
