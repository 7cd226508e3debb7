//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// regtrack - Daily installed-software registry snapshots and diffs.
#[derive(Debug, Parser)]
#[command(name = "regtrack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ./regtrack.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot folder (overrides config)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan, snapshot, prune, and diff in one pass (default if no command specified)
    Run(RunArgs),

    /// Scan the registry and write today's snapshot
    Snapshot(SnapshotArgs),

    /// Archive superseded snapshots into the old/ subfolder
    Prune(PruneArgs),

    /// Compare the two remaining snapshots
    Diff(DiffArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Date to snapshot as (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,
}

/// Arguments for the `snapshot` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SnapshotArgs {
    /// Date to snapshot as (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `prune` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PruneArgs {
    /// Date to treat as today (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `diff` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DiffArgs {
    /// Output the structured diff as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_run() {
        let cli = Cli::parse_from(["regtrack"]);
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_snapshot_with_date() {
        let cli = Cli::parse_from(["regtrack", "snapshot", "--date", "2024-01-02"]);
        match cli.command {
            Some(Commands::Snapshot(args)) => {
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 1, 2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(Cli::try_parse_from(["regtrack", "snapshot", "--date", "yesterday"]).is_err());
    }

    #[test]
    fn global_dir_flag_applies_to_subcommands() {
        let cli = Cli::parse_from(["regtrack", "diff", "--dir", "/srv/snapshots"]);
        assert_eq!(cli.dir, Some(PathBuf::from("/srv/snapshots")));
    }
}
