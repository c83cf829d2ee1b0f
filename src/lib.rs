//! imagegen-preflight - Pre-flight environment validation for the image
//! generation skill.
//!
//! Before an agent shells out to the skill's image generation script, it runs
//! `check-env`. The validator checks that the skill directory carries a real
//! API key, that the companion script is in place, and whether the optional
//! `uv` helper is installed, then exits 0 when it is safe to proceed.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks and their registry
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration, `preflight.yml` overrides, `.env` parsing
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Check verdicts and tool probing
//! - [`ui`] - Report rendering
//! - [`validator`] - Check orchestration and the readiness report
//!
//! # Example
//!
//! ```
//! use imagegen_preflight::config::EnvFileParser;
//!
//! let vars = EnvFileParser::parse("GOOGLE_AI_API_KEY=sk-real-123\n");
//! assert_eq!(vars["GOOGLE_AI_API_KEY"], "sk-real-123");
//! ```
//!
//! For full validation runs, see the integration tests.

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod ui;
pub mod validator;

pub use error::{PreflightError, Result};
