//! Optional helper tool detection.

use super::{Check, CheckContext, CheckId};
use crate::error::Result;
use crate::requirements::{CheckResult, FailureReason};

/// Reports whether the optional helper is on PATH. Never fails.
pub struct OptionalToolCheck;

impl Check for OptionalToolCheck {
    fn id(&self) -> CheckId {
        CheckId::new("optional-tool")
    }

    fn name(&self) -> &str {
        "Optional tool"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let config = ctx.config;
        let tool = &config.optional_tool;
        tracing::debug!(tool = %tool, "Probing for optional tool");

        if ctx.probe.is_tool_available(tool) {
            return Ok(CheckResult::pass(format!("{} is installed", tool)));
        }

        Ok(CheckResult::warn(
            FailureReason::ToolMissing,
            format!("{} not found (optional, recommended)", tool),
        )
        .with_remediation(format!("Install: {}", config.optional_tool_install))
        .with_remediation(format!("Fallback: {}", config.optional_tool_fallback)))
    }
}
