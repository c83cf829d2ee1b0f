//! Companion script presence check.

use std::fs;
use std::io::ErrorKind;

use super::{Check, CheckContext, CheckId};
use crate::error::{PreflightError, Result};
use crate::requirements::{CheckResult, FailureReason};

/// Verifies the image generation script ships with the skill.
pub struct RequiredArtifactCheck;

impl Check for RequiredArtifactCheck {
    fn id(&self) -> CheckId {
        CheckId::new("required-artifact")
    }

    fn name(&self) -> &str {
        "Required artifact"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let config = ctx.config;
        let path = config.artifact_path();
        tracing::debug!(path = %path.display(), "Checking required artifact");

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(CheckResult::fail(
                    FailureReason::ArtifactNotFound,
                    format!("{} not found at {}", config.required_artifact.display(), path.display()),
                )
                .with_remediation("Reinstall the skill so the script sits next to its .env file"));
            }
            Err(source) => return Err(PreflightError::FileUnreadable { path, source }),
        };

        if !metadata.is_file() {
            return Ok(CheckResult::fail(
                FailureReason::ArtifactNotFound,
                format!("{} is not a regular file", path.display()),
            ));
        }

        Ok(CheckResult::pass(format!(
            "{} found",
            config.required_artifact.display()
        )))
    }
}
