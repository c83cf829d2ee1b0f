//! Report rendering.
//!
//! Output layout, one line each:
//!
//! ```text
//! Checking image generation environment in /path/to/skill
//! [OK] .env found with GOOGLE_AI_API_KEY set
//! [WARN] uv not found (optional, recommended)
//!   Install: curl -LsSf https://astral.sh/uv/install.sh | sh
//!   Fallback: python3 main.py <output.png> "<prompt>" (after: pip install google-genai python-dotenv pillow)
//! [OK] main.py found
//! Environment ready: all required checks passed.
//! ```
//!
//! Every check owns exactly one tagged line; remediation lines are indented
//! and untagged.

use std::io::Write;
use std::path::Path;

use super::icons::StatusKind;
use super::theme::PreflightTheme;
use crate::validator::{CheckOutcome, ExitStatus, ReadinessReport, ReportEntry};

/// Renders a [`ReadinessReport`] for humans and line-oriented tooling.
pub struct ReportPrinter {
    theme: PreflightTheme,
}

impl ReportPrinter {
    /// Create a new printer.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: PreflightTheme::for_color(use_color),
        }
    }

    /// Write the header line.
    pub fn header<W: Write>(&self, target_dir: &Path, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}",
            self.theme.format_header(&target_dir.display().to_string())
        )
    }

    /// Write one check's status line and any remediation lines.
    pub fn entry<W: Write>(&self, entry: &ReportEntry, writer: &mut W) -> std::io::Result<()> {
        match &entry.outcome {
            CheckOutcome::Completed(result) => {
                let kind = StatusKind::from(result.status);
                writeln!(writer, "{}", kind.format(&self.theme, &result.message))?;
                for line in &result.remediation {
                    writeln!(writer, "{}", self.theme.format_hint(line))?;
                }
            }
            CheckOutcome::InternalError(message) => {
                writeln!(writer, "{}", StatusKind::Error.format(&self.theme, message))?;
            }
        }
        Ok(())
    }

    /// Write the summary banner.
    pub fn summary<W: Write>(
        &self,
        report: &ReadinessReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let banner = match report.exit_status() {
            ExitStatus::Ready => self
                .theme
                .success
                .apply_to("Environment ready: all required checks passed.".to_string()),
            ExitStatus::NotReady => self.theme.error.apply_to(format!(
                "Environment not ready: {} check(s) failed.",
                report.count(crate::requirements::CheckStatus::Fail)
            )),
            ExitStatus::InternalError => self.theme.error.apply_to(format!(
                "Validation incomplete: {} check(s) could not run.",
                report.internal_errors()
            )),
        };
        writeln!(writer, "{}", banner)
    }

    /// Write the full report: header, every entry, summary.
    pub fn print<W: Write>(&self, report: &ReadinessReport, writer: &mut W) -> std::io::Result<()> {
        self.header(report.target_dir(), writer)?;
        for entry in report.entries() {
            self.entry(entry, writer)?;
        }
        self.summary(report, writer)
    }
}
