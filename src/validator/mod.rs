//! Validation orchestration.
//!
//! [`EnvironmentValidator`] runs every registered check, in order, against
//! one [`PreflightConfig`] and collects the outcomes into a
//! [`ReadinessReport`].
//!
//! # Example
//!
//! ```no_run
//! use imagegen_preflight::config::PreflightConfig;
//! use imagegen_preflight::validator::EnvironmentValidator;
//!
//! let validator = EnvironmentValidator::new(PreflightConfig::new("/path/to/skill"));
//! let report = validator.validate();
//! std::process::exit(report.exit_status().code().into());
//! ```

pub mod report;

pub use report::{CheckOutcome, ExitStatus, ReadinessReport, ReportEntry};

use crate::checks::{CheckContext, CheckRegistry};
use crate::config::PreflightConfig;
use crate::requirements::{PathProbe, ToolProbe};

/// Runs the pre-flight checks for one target directory.
pub struct EnvironmentValidator {
    config: PreflightConfig,
    registry: CheckRegistry,
    probe: Box<dyn ToolProbe>,
}

impl EnvironmentValidator {
    /// Validator with the built-in checks and a PATH-backed probe.
    pub fn new(config: PreflightConfig) -> Self {
        Self::with_parts(
            config,
            CheckRegistry::with_builtins(),
            Box::new(PathProbe::from_env()),
        )
    }

    /// Validator with explicit checks and probe.
    pub fn with_parts(
        config: PreflightConfig,
        registry: CheckRegistry,
        probe: Box<dyn ToolProbe>,
    ) -> Self {
        Self {
            config,
            registry,
            probe,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &PreflightConfig {
        &self.config
    }

    /// Run every check and collect the outcomes.
    ///
    /// All checks run even after one fails, so the user sees every problem in
    /// a single pass. A check that cannot reach a verdict is recorded as an
    /// internal error and the remaining checks still run.
    pub fn validate(&self) -> ReadinessReport {
        let ctx = CheckContext::new(&self.config, self.probe.as_ref());
        let mut report = ReadinessReport::new(self.config.target_dir());

        for check in self.registry.iter() {
            let outcome = match check.run(&ctx) {
                Ok(result) => {
                    tracing::debug!(
                        check = %check.id(),
                        status = ?result.status,
                        reason = ?result.reason,
                        "Check finished"
                    );
                    CheckOutcome::Completed(result)
                }
                Err(e) => {
                    tracing::warn!(check = %check.id(), error = %e, "Check could not complete");
                    CheckOutcome::InternalError(format!("{}: {}", check.name(), e))
                }
            };
            report.push(ReportEntry {
                check: check.id(),
                outcome,
            });
        }

        report
    }
}
