//! Status tags for check lines.
//!
//! Downstream automation keys off these tags, so their text never changes
//! with color settings; only the styling does.

use super::theme::PreflightTheme;
use crate::requirements::CheckStatus;

/// Canonical status kinds used on check lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Ok,
    /// Non-blocking warning.
    Warning,
    /// Check failed or could not complete.
    Error,
}

impl StatusKind {
    /// Bracketed tag.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warning => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }

    /// Styled tag using the given theme.
    pub fn styled(self, theme: &PreflightTheme) -> String {
        let tag = self.bracketed();
        match self {
            Self::Ok => theme.success.apply_to(tag).to_string(),
            Self::Warning => theme.warning.apply_to(tag).to_string(),
            Self::Error => theme.error.apply_to(tag).to_string(),
        }
    }

    /// Format a status line: styled tag + message.
    pub fn format(self, theme: &PreflightTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Pass => Self::Ok,
            CheckStatus::Warn => Self::Warning,
            CheckStatus::Fail => Self::Error,
        }
    }
}
