//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::RegtrackConfig;
use crate::error::Result;
use crate::ui::Output;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against the given output writer.
    fn execute(&self, out: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: RegtrackConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the resolved configuration.
    pub fn new(config: RegtrackConfig) -> Self {
        Self { config }
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &RegtrackConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand means the full end-to-end flow: scan, snapshot,
    /// prune, diff.
    pub fn dispatch(&self, cli: &Cli, out: &Output) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(self.config.clone(), args.clone());
                cmd.execute(out)
            }
            Some(Commands::Snapshot(args)) => {
                let cmd = super::snapshot::SnapshotCommand::new(self.config.clone(), args.clone());
                cmd.execute(out)
            }
            Some(Commands::Prune(args)) => {
                let cmd = super::prune::PruneCommand::new(self.config.clone(), args.clone());
                cmd.execute(out)
            }
            Some(Commands::Diff(args)) => {
                let cmd = super::diff::DiffCommand::new(self.config.clone(), args.clone());
                cmd.execute(out)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
            None => {
                let cmd = super::run::RunCommand::new(self.config.clone(), RunArgs::default());
                cmd.execute(out)
            }
        }
    }
}
