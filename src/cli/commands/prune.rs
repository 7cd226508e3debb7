//! Prune command implementation.
//!
//! The `regtrack prune` command applies the retention policy: keep today's
//! snapshot and the latest prior one, archive the rest.

use crate::cli::args::PruneArgs;
use crate::config::RegtrackConfig;
use crate::error::Result;
use crate::snapshot::{apply_retention, today};
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The prune command implementation.
pub struct PruneCommand {
    config: RegtrackConfig,
    args: PruneArgs,
}

impl PruneCommand {
    /// Create a new prune command.
    pub fn new(config: RegtrackConfig, args: PruneArgs) -> Self {
        Self { config, args }
    }
}

impl Command for PruneCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let date = self.args.date.unwrap_or_else(today);
        let report = apply_retention(&self.config.snapshot_dir, date)?;

        for path in &report.archived {
            out.detail(&format!("Archived {}", path.display()));
        }
        for (path, message) in &report.failed {
            out.warning(&format!("Could not archive {}: {}", path.display(), message));
        }

        out.println(&format!(
            "Retention: kept {}, archived {}",
            report.kept.len(),
            report.archived.len()
        ));

        if report.is_clean() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
