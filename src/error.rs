//! Error types for pre-flight validation.
//!
//! This module defines [`PreflightError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failed check is NOT an error. Checks report problems the user can fix
//!   through [`CheckResult`](crate::requirements::CheckResult).
//! - `PreflightError` is reserved for conditions that stop a check from
//!   reaching a verdict at all (unreadable files, bad invocation).
//! - Use `anyhow::Error` (via `PreflightError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pre-flight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// The target directory does not exist or is not a directory.
    #[error("Target directory not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// Failed to parse the `preflight.yml` override file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A file exists (or may exist) but could not be read.
    #[error("Cannot read {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pre-flight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_not_found_displays_path() {
        let err = PreflightError::TargetNotFound {
            path: PathBuf::from("/skills/imagegen"),
        };
        assert!(err.to_string().contains("/skills/imagegen"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PreflightError::ConfigParseError {
            path: PathBuf::from("/skill/preflight.yml"),
            message: "unknown field `colour`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/skill/preflight.yml"));
        assert!(msg.contains("unknown field"));
    }

    #[test]
    fn file_unreadable_displays_path_and_cause() {
        let err = PreflightError::FileUnreadable {
            path: PathBuf::from("/skill/.env"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/skill/.env"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: PreflightError = io_err.into();
        assert!(matches!(err, PreflightError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_to_other() {
        let err: PreflightError = anyhow::anyhow!("no executable path").into();
        assert!(matches!(err, PreflightError::Other(_)));
        assert_eq!(err.to_string(), "no executable path");
    }
}
