//! Configuration discovery and loading.
//!
//! The configuration for a run is assembled in this order (later wins):
//! 1. Built-in defaults
//! 2. `<target_dir>/preflight.yml`, when present

use crate::config::schema::{ConfigOverrides, PreflightConfig};
use crate::error::{PreflightError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the optional override file inside the target directory.
pub const OVERRIDES_FILE: &str = "preflight.yml";

/// Path where the override file would live for a target directory.
pub fn overrides_path(target_dir: &Path) -> PathBuf {
    target_dir.join(OVERRIDES_FILE)
}

/// Build the configuration for a target directory.
///
/// Fails with [`PreflightError::TargetNotFound`] when `target_dir` is not a
/// directory, and with a parse or read error when `preflight.yml` exists but
/// cannot be used. A missing override file is not an error.
pub fn load_config(target_dir: &Path) -> Result<PreflightConfig> {
    if !target_dir.is_dir() {
        return Err(PreflightError::TargetNotFound {
            path: target_dir.to_path_buf(),
        });
    }

    let mut config = PreflightConfig::new(target_dir);
    if let Some(overrides) = load_overrides(&overrides_path(target_dir))? {
        tracing::debug!("Applying overrides from {}", OVERRIDES_FILE);
        config.apply(overrides);
    }
    Ok(config)
}

/// Read and parse an override file, returning `None` if it doesn't exist.
pub fn load_overrides(path: &Path) -> Result<Option<ConfigOverrides>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PreflightError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if content.trim().is_empty() {
        return Ok(Some(ConfigOverrides::default()));
    }

    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|e| PreflightError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
