//! Diff command implementation.
//!
//! The `regtrack diff` command compares the two snapshots retention left
//! behind and reports column- and value-level differences.

use anyhow::Context;

use crate::cli::args::DiffArgs;
use crate::config::RegtrackConfig;
use crate::error::Result;
use crate::sheet::XlsxStore;
use crate::snapshot::compare_folder;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The diff command implementation.
pub struct DiffCommand {
    config: RegtrackConfig,
    args: DiffArgs,
}

impl DiffCommand {
    /// Create a new diff command.
    pub fn new(config: RegtrackConfig, args: DiffArgs) -> Self {
        Self { config, args }
    }
}

impl Command for DiffCommand {
    fn execute(&self, _out: &Output) -> Result<CommandResult> {
        let store = XlsxStore::new(self.config.screen_columns);
        let diff = compare_folder(&store, &self.config.snapshot_dir, &self.config.sheet_name)?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&diff).context("serializing diff to JSON")?;
            println!("{}", json);
        } else {
            // The report itself is the command's product, so it prints in
            // every output mode.
            print!("{}", diff.render());
        }
        Ok(CommandResult::success())
    }
}
