//! The `check-env` command.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::Result;
use crate::ui::ReportPrinter;
use crate::validator::EnvironmentValidator;

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the environment is ready.
    pub success: bool,

    /// Exit code to use (0 ready, 2 a check failed, 1 internal error).
    pub exit_code: u8,
}

/// Validates a skill directory and prints the report.
pub struct CheckCommand {
    target_dir: PathBuf,
    use_color: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(target_dir: &Path, use_color: bool) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            use_color,
        }
    }

    /// Get the target directory.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Run validation, writing the report to `writer`.
    ///
    /// Returns `Err` only when validation cannot start (bad target directory,
    /// unusable `preflight.yml`) or output cannot be written.
    pub fn execute<W: Write>(&self, writer: &mut W) -> Result<CommandResult> {
        let config = load_config(&self.target_dir)?;
        let report = EnvironmentValidator::new(config).validate();

        ReportPrinter::new(self.use_color).print(&report, writer)?;
        writer.flush()?;

        let status = report.exit_status();
        Ok(CommandResult {
            success: report.is_ready(),
            exit_code: status.code(),
        })
    }
}
