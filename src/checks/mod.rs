//! Pre-flight checks.
//!
//! This module provides the core trait and types for defining checks:
//!
//! - [`Check`] - The trait every check implements
//! - [`CheckId`] - Unique identifier for a check
//! - [`CheckContext`] - Configuration and capabilities handed to each check
//! - [`CheckRegistry`] - The ordered list of checks a run executes

pub mod config_file;
pub mod optional_tool;
pub mod registry;
pub mod required_artifact;

pub use config_file::ConfigFileCheck;
pub use optional_tool::OptionalToolCheck;
pub use registry::CheckRegistry;
pub use required_artifact::RequiredArtifactCheck;

use crate::config::PreflightConfig;
use crate::error::Result;
use crate::requirements::{CheckResult, ToolProbe};

/// Unique identifier for a check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckId(pub String);

impl CheckId {
    /// Create a new check ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a check may look at.
pub struct CheckContext<'a> {
    /// Run configuration.
    pub config: &'a PreflightConfig,
    /// Tool availability capability.
    pub probe: &'a dyn ToolProbe,
}

impl<'a> CheckContext<'a> {
    /// Create a new context.
    pub fn new(config: &'a PreflightConfig, probe: &'a dyn ToolProbe) -> Self {
        Self { config, probe }
    }
}

/// A single pre-flight check.
///
/// A check inspects external state and never mutates it. Problems the user
/// can fix are reported as a failing or warning [`CheckResult`]; an `Err`
/// means the check could not reach a verdict at all.
pub trait Check {
    /// Unique identifier for this check.
    fn id(&self) -> CheckId;

    /// Human-readable name of the check.
    fn name(&self) -> &str;

    /// Run the check.
    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult>;
}
