//! Credential check against the skill's `.env` file.

use std::io::ErrorKind;

use super::{Check, CheckContext, CheckId};
use crate::config::EnvFileParser;
use crate::error::{PreflightError, Result};
use crate::requirements::{CheckResult, FailureReason};

/// Verifies the env file exists and defines a real value for the required key.
pub struct ConfigFileCheck;

impl Check for ConfigFileCheck {
    fn id(&self) -> CheckId {
        CheckId::new("config-file")
    }

    fn name(&self) -> &str {
        "Config file"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let config = ctx.config;
        let path = config.env_file_path();
        let key = &config.required_key;

        let vars = match EnvFileParser::load(&path) {
            Ok(vars) => vars,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(CheckResult::fail(
                    FailureReason::ConfigNotFound,
                    format!("{} file not found at {}", config.env_file.display(), path.display()),
                )
                .with_remediation(format!(
                    "Create it with: echo '{}=<your key>' > {}",
                    key,
                    path.display()
                ))
                .with_remediation(format!("Get an API key at: {}", config.credential_url)));
            }
            Err(source) => return Err(PreflightError::FileUnreadable { path, source }),
        };

        let Some(value) = vars.get(key.as_str()) else {
            tracing::debug!(file = %path.display(), key = %key, "Required key not defined");
            return Ok(CheckResult::fail(
                FailureReason::KeyMissing,
                format!("{} not set in {}", key, path.display()),
            )
            .with_remediation(format!("Add a line: {}=<your key>", key))
            .with_remediation(format!("Get an API key at: {}", config.credential_url)));
        };

        if config.is_placeholder(value) {
            return Ok(CheckResult::fail(
                FailureReason::PlaceholderValue,
                format!("{} in {} is empty or a placeholder", key, path.display()),
            )
            .with_remediation(format!("Replace it with a real key from: {}", config.credential_url)));
        }

        Ok(CheckResult::pass(format!(
            "{} found with {} set",
            config.env_file.display(),
            key
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::FixedProbe;
    use crate::config::PreflightConfig;
    use crate::requirements::CheckStatus;
    use std::fs;
    use tempfile::TempDir;

    fn run_with_env(content: Option<&str>) -> CheckResult {
        let temp = TempDir::new().unwrap();
        if let Some(content) = content {
            fs::write(temp.path().join(".env"), content).unwrap();
        }
        let config = PreflightConfig::new(temp.path());
        let probe = FixedProbe(true);
        ConfigFileCheck
            .run(&CheckContext::new(&config, &probe))
            .unwrap()
    }

    #[test]
    fn missing_file_fails_with_remediation() {
        let result = run_with_env(None);

        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.reason, Some(FailureReason::ConfigNotFound));
        assert!(result.message.contains(".env"));
        assert!(result
            .remediation
            .iter()
            .any(|l| l.contains("aistudio.google.com")));
        assert!(result
            .remediation
            .iter()
            .any(|l| l.contains("GOOGLE_AI_API_KEY=")));
    }

    #[test]
    fn real_key_passes() {
        let result = run_with_env(Some("GOOGLE_AI_API_KEY=sk-real-123\n"));
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.reason.is_none());
    }

    #[test]
    fn substring_key_does_not_count() {
        let result = run_with_env(Some("FOO_GOOGLE_AI_API_KEY=realvalue\n"));
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.reason, Some(FailureReason::KeyMissing));
    }

    #[test]
    fn placeholder_is_rejected() {
        let result = run_with_env(Some("GOOGLE_AI_API_KEY=your_key_here\n"));
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.reason, Some(FailureReason::PlaceholderValue));
    }

    #[test]
    fn quoted_placeholder_is_rejected() {
        let result = run_with_env(Some("GOOGLE_AI_API_KEY=\"your_api_key_here\"\n"));
        assert_eq!(result.reason, Some(FailureReason::PlaceholderValue));
    }

    #[test]
    fn placeholder_with_inline_comment_is_rejected() {
        let result = run_with_env(Some("GOOGLE_AI_API_KEY=your_key_here  # get one at aistudio\n"));
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.reason, Some(FailureReason::PlaceholderValue));
    }

    #[test]
    fn empty_quoted_value_with_inline_comment_is_rejected() {
        let result = run_with_env(Some("GOOGLE_AI_API_KEY=\"\" # fill me\n"));
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.reason, Some(FailureReason::PlaceholderValue));
    }

    #[test]
    fn real_key_with_inline_comment_passes() {
        let result = run_with_env(Some("GOOGLE_AI_API_KEY=sk-real-123 # personal key\n"));
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn empty_value_is_rejected() {
        let result = run_with_env(Some("GOOGLE_AI_API_KEY=\n"));
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.reason, Some(FailureReason::PlaceholderValue));
    }

    #[test]
    fn whitespace_value_is_rejected() {
        let result = run_with_env(Some("GOOGLE_AI_API_KEY=\"   \"\n"));
        assert_eq!(result.reason, Some(FailureReason::PlaceholderValue));
    }

    #[test]
    fn empty_file_means_key_missing() {
        let result = run_with_env(Some(""));
        assert_eq!(result.reason, Some(FailureReason::KeyMissing));
    }

    #[test]
    fn honors_configured_key() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "GEMINI_API_KEY=abc\n").unwrap();
        let mut config = PreflightConfig::new(temp.path());
        config.required_key = "GEMINI_API_KEY".to_string();
        let probe = FixedProbe(false);

        let result = ConfigFileCheck
            .run(&CheckContext::new(&config, &probe))
            .unwrap();
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn unreadable_file_is_an_error_not_absence() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".env")).unwrap();
        let config = PreflightConfig::new(temp.path());
        let probe = FixedProbe(true);

        let result = ConfigFileCheck.run(&CheckContext::new(&config, &probe));
        assert!(matches!(result, Err(PreflightError::FileUnreadable { .. })));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), [0xff, 0xfe, 0x00]).unwrap();
        let config = PreflightConfig::new(temp.path());
        let probe = FixedProbe(true);

        let result = ConfigFileCheck.run(&CheckContext::new(&config, &probe));
        assert!(matches!(result, Err(PreflightError::FileUnreadable { .. })));
    }
}
