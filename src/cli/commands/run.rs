//! Run command implementation.
//!
//! The `regtrack run` command (also the default with no subcommand) is the
//! full end-to-end flow: scan the registry, write today's snapshot,
//! apply retention, then print the diff against the surviving prior
//! snapshot.

use std::io::{BufRead, Write};

use crate::cli::args::RunArgs;
use crate::config::RegtrackConfig;
use crate::error::Result;
use crate::registry::{platform_provider, scan_columns};
use crate::sheet::XlsxStore;
use crate::snapshot::{apply_retention, compare_folder, today, write_snapshot};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    config: RegtrackConfig,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(config: RegtrackConfig, args: RunArgs) -> Self {
        Self { config, args }
    }
}

impl Command for RunCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let date = self.args.date.unwrap_or_else(today);
        let provider = platform_provider()?;

        out.println(&format!(
            "Scanning {} registry paths...",
            self.config.scans.len()
        ));
        let columns = scan_columns(provider.as_ref(), &self.config.scans, self.config.max_subkeys)?;

        let store = XlsxStore::new(self.config.screen_columns);
        let path = write_snapshot(
            &store,
            &self.config.snapshot_dir,
            date,
            &self.config.sheet_name,
            columns,
        )?;
        out.success(&format!("Snapshot written: {}", path.display()));

        let report = apply_retention(&self.config.snapshot_dir, date)?;
        for (failed, message) in &report.failed {
            out.warning(&format!(
                "Could not archive {}: {}",
                failed.display(),
                message
            ));
        }
        out.println(&format!(
            "Retention: kept {}, archived {}",
            report.kept.len(),
            report.archived.len()
        ));

        let diff = compare_folder(&store, &self.config.snapshot_dir, &self.config.sheet_name)?;
        print!("{}", diff.render());

        if self.args.pause {
            pause_for_enter();
        }
        Ok(CommandResult::success())
    }
}

/// Block until the user presses Enter. Presentation only, so any read error
/// is ignored.
fn pause_for_enter() {
    print!("\nPress Enter to exit: ");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
