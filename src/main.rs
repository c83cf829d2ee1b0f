//! check-env entry point.

use std::process::ExitCode;

use clap::Parser;
use imagegen_preflight::cli::{CheckCommand, Cli};
use imagegen_preflight::ui::should_use_colors;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG` if set, otherwise WARN. Logs go to stderr
/// so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("imagegen_preflight=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    // Usage errors exit 1; 2 is reserved for failed checks.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 1 } else { 0 });
        }
    };

    tracing::debug!("check-env starting with args: {:?}", cli);

    let result = cli.target_dir().and_then(|target| {
        let command = CheckCommand::new(&target, should_use_colors());
        command.execute(&mut std::io::stdout().lock())
    });

    match result {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
