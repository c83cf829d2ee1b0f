//! CLI argument definitions.
//!
//! This module defines the CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;

/// Check that the image generation skill is ready to run.
#[derive(Debug, Parser)]
#[command(name = "check-env")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Skill directory to validate (defaults to the directory above this executable)
    #[arg(value_name = "SKILL_DIR")]
    pub target: Option<PathBuf>,
}

impl Cli {
    /// The directory to validate: the argument if given, else the default location.
    pub fn target_dir(&self) -> Result<PathBuf> {
        match &self.target {
            Some(dir) => Ok(dir.clone()),
            None => default_target_dir(),
        }
    }
}

/// Parent of the directory holding this executable.
///
/// The binary ships as `<skill>/scripts/check-env`, so this resolves to the
/// skill directory.
pub fn default_target_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Cannot locate the check-env executable")?;
    let bin_dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(bin_dir.parent().unwrap_or(bin_dir).to_path_buf())
}
