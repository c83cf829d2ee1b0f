//! Requirement detection primitives.
//!
//! # Modules
//!
//! - [`probe`] - Tool availability probing over PATH
//! - [`status`] - Check verdicts and failure classifications

pub mod probe;
pub mod status;

pub use probe::{PathProbe, ToolProbe};
pub use status::{CheckResult, CheckStatus, FailureReason};
