//! regtrack CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use regtrack::cli::{Cli, CommandDispatcher};
use regtrack::config::RegtrackConfig;
use regtrack::ui::{Output, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("regtrack=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("regtrack=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("regtrack starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let out = Output::new(output_mode);

    // Resolve configuration: file (explicit or discovered), then --dir
    let config = match RegtrackConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_dir_override(cli.dir.as_deref()),
        Err(e) => {
            out.error(&format!("Error: {}", e));
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    let dispatcher = CommandDispatcher::new(config);
    match dispatcher.dispatch(&cli, &out) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            out.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
