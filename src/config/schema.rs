//! Pre-flight configuration schema.
//!
//! [`PreflightConfig`] is built once at start-up and handed to every check.
//! [`ConfigOverrides`] is the serde shape of the optional `preflight.yml`
//! file a skill directory may carry.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Key the image generation script reads its credential from.
pub const DEFAULT_REQUIRED_KEY: &str = "GOOGLE_AI_API_KEY";

/// Values shipped in `.env.example` files that must never pass as real keys.
pub const DEFAULT_PLACEHOLDERS: &[&str] = &["your_key_here", "your_api_key_here"];

/// Python packages `main.py` imports when run without `uv`.
pub const FALLBACK_PACKAGES: &str = "google-genai python-dotenv pillow";

/// Everything the checks need to know about one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightConfig {
    /// Skill directory under validation.
    pub target_dir: PathBuf,
    /// Env file name, relative to `target_dir`.
    pub env_file: PathBuf,
    /// Credential key that must be defined in the env file.
    pub required_key: String,
    /// Sentinel values rejected for `required_key`.
    pub placeholders: Vec<String>,
    /// Where users obtain a credential.
    pub credential_url: String,
    /// Helper executable that speeds things up but is not required.
    pub optional_tool: String,
    /// Command that installs `optional_tool`.
    pub optional_tool_install: String,
    /// How to run the collaborator without `optional_tool`.
    pub optional_tool_fallback: String,
    /// Companion script, relative to `target_dir`.
    pub required_artifact: PathBuf,
}

impl PreflightConfig {
    /// Default configuration for a skill directory.
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            env_file: PathBuf::from(".env"),
            required_key: DEFAULT_REQUIRED_KEY.to_string(),
            placeholders: DEFAULT_PLACEHOLDERS.iter().map(|s| s.to_string()).collect(),
            credential_url: "https://aistudio.google.com/apikey".to_string(),
            optional_tool: "uv".to_string(),
            optional_tool_install: "curl -LsSf https://astral.sh/uv/install.sh | sh".to_string(),
            optional_tool_fallback: format!(
                "python3 main.py <output.png> \"<prompt>\" (after: pip install {})",
                FALLBACK_PACKAGES
            ),
            required_artifact: PathBuf::from("main.py"),
        }
    }

    /// Absolute-or-relative path to the env file.
    pub fn env_file_path(&self) -> PathBuf {
        self.target_dir.join(&self.env_file)
    }

    /// Path to the companion script.
    pub fn artifact_path(&self) -> PathBuf {
        self.target_dir.join(&self.required_artifact)
    }

    /// The skill directory.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Whether `value` must be rejected as a stand-in for a real credential.
    ///
    /// Empty and whitespace-only values count as placeholders.
    pub fn is_placeholder(&self, value: &str) -> bool {
        let value = value.trim();
        value.is_empty() || self.placeholders.iter().any(|p| p == value)
    }

    /// Apply overrides from `preflight.yml` on top of this configuration.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(env_file) = overrides.env_file {
            self.env_file = env_file;
        }
        if let Some(key) = overrides.required_key {
            self.required_key = key;
        }
        if let Some(placeholders) = overrides.placeholders {
            self.placeholders = placeholders;
        }
        if let Some(url) = overrides.credential_url {
            self.credential_url = url;
        }
        if let Some(tool) = overrides.optional_tool {
            self.optional_tool = tool;
        }
        if let Some(install) = overrides.optional_tool_install {
            self.optional_tool_install = install;
        }
        if let Some(fallback) = overrides.optional_tool_fallback {
            self.optional_tool_fallback = fallback;
        }
        if let Some(artifact) = overrides.required_artifact {
            self.required_artifact = artifact;
        }
    }
}

/// Optional overrides read from `<target_dir>/preflight.yml`.
///
/// ```yaml
/// required_key: GEMINI_API_KEY
/// optional_tool: uvx
/// required_artifact: bin/generate.py
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub env_file: Option<PathBuf>,
    pub required_key: Option<String>,
    pub placeholders: Option<Vec<String>>,
    pub credential_url: Option<String>,
    pub optional_tool: Option<String>,
    pub optional_tool_install: Option<String>,
    pub optional_tool_fallback: Option<String>,
    pub required_artifact: Option<PathBuf>,
}
