//! Readiness report types.

use std::path::{Path, PathBuf};

use crate::checks::CheckId;
use crate::requirements::{CheckResult, CheckStatus};

/// How a single check ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The check reached a verdict.
    Completed(CheckResult),
    /// The check could not reach a verdict (unexpected I/O failure).
    InternalError(String),
}

/// One line item of a [`ReadinessReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Which check produced this entry.
    pub check: CheckId,
    /// What happened.
    pub outcome: CheckOutcome,
}

impl ReportEntry {
    /// The check's result, if it completed.
    pub fn result(&self) -> Option<&CheckResult> {
        match &self.outcome {
            CheckOutcome::Completed(result) => Some(result),
            CheckOutcome::InternalError(_) => None,
        }
    }

    /// The check's status, if it completed.
    pub fn status(&self) -> Option<CheckStatus> {
        self.result().map(|r| r.status)
    }

    /// Whether the check failed to complete.
    pub fn is_internal_error(&self) -> bool {
        matches!(self.outcome, CheckOutcome::InternalError(_))
    }
}

/// Process-level outcome of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every check passed or only warned.
    Ready,
    /// Validation could not complete.
    InternalError,
    /// At least one check failed.
    NotReady,
}

impl ExitStatus {
    /// Process exit code.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Ready => 0,
            ExitStatus::InternalError => 1,
            ExitStatus::NotReady => 2,
        }
    }
}

/// Ordered results of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessReport {
    target_dir: PathBuf,
    entries: Vec<ReportEntry>,
}

impl ReadinessReport {
    /// Create an empty report for a target directory.
    pub fn new(target_dir: &Path) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            entries: Vec::new(),
        }
    }

    /// Append one check's outcome.
    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Directory that was validated.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Entries in the order the checks ran.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Entry for a given check.
    pub fn entry(&self, id: &CheckId) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| &e.check == id)
    }

    /// Number of checks with the given status.
    pub fn count(&self, status: CheckStatus) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status() == Some(status))
            .count()
    }

    /// Number of checks that could not complete.
    pub fn internal_errors(&self) -> usize {
        self.entries.iter().filter(|e| e.is_internal_error()).count()
    }

    /// Whether the collaborator may run. Warnings never block.
    pub fn is_ready(&self) -> bool {
        self.entries
            .iter()
            .all(|e| matches!(e.status(), Some(status) if !status.is_blocking()))
    }

    /// Fold the report into a process-level status.
    ///
    /// Internal errors take precedence over failed checks.
    pub fn exit_status(&self) -> ExitStatus {
        if self.internal_errors() > 0 {
            ExitStatus::InternalError
        } else if self.is_ready() {
            ExitStatus::Ready
        } else {
            ExitStatus::NotReady
        }
    }
}
