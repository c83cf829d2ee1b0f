//! Check status types.
//!
//! Each check produces a [`CheckResult`] that says whether the environment
//! meets one requirement, and if not, why and how to fix it.

/// Verdict of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// Requirement met.
    Pass,
    /// Something is missing, but the collaborator can still run.
    Warn,
    /// The collaborator must not run until this is fixed.
    Fail,
}

impl CheckStatus {
    /// Whether this status blocks readiness.
    pub fn is_blocking(&self) -> bool {
        matches!(self, CheckStatus::Fail)
    }
}

/// Why a check did not pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The env file does not exist.
    ConfigNotFound,
    /// The env file exists but never defines the required key.
    KeyMissing,
    /// The key is defined but holds a placeholder, empty or blank value.
    PlaceholderValue,
    /// The optional helper tool is not on PATH.
    ToolMissing,
    /// The companion script is not where it should be.
    ArtifactNotFound,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::ConfigNotFound => write!(f, "file not found"),
            FailureReason::KeyMissing => write!(f, "key missing"),
            FailureReason::PlaceholderValue => write!(f, "placeholder value"),
            FailureReason::ToolMissing => write!(f, "tool not found"),
            FailureReason::ArtifactNotFound => write!(f, "artifact not found"),
        }
    }
}

/// The result of running a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Verdict.
    pub status: CheckStatus,
    /// One-line, human-readable description of the verdict.
    pub message: String,
    /// Classification for anything other than a pass.
    pub reason: Option<FailureReason>,
    /// Lines telling the user how to fix the problem.
    pub remediation: Vec<String>,
}

impl CheckResult {
    /// A passing result.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Pass,
            message: message.into(),
            reason: None,
            remediation: Vec::new(),
        }
    }

    /// A non-blocking warning.
    pub fn warn(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Warn,
            message: message.into(),
            reason: Some(reason),
            remediation: Vec::new(),
        }
    }

    /// A blocking failure.
    pub fn fail(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Fail,
            message: message.into(),
            reason: Some(reason),
            remediation: Vec::new(),
        }
    }

    /// Add a remediation line.
    pub fn with_remediation(mut self, line: impl Into<String>) -> Self {
        self.remediation.push(line.into());
        self
    }
}
