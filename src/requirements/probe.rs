//! Tool availability probing.
//!
//! Checks ask "is this executable available?" through the [`ToolProbe`]
//! trait, so they don't care how presence is detected. [`PathProbe`] is the
//! production implementation: it walks PATH entries itself instead of
//! shelling out to `which`, whose behavior varies across systems and is
//! sometimes a shell builtin with inconsistent error handling.
//!
//! # Example
//!
//! ```no_run
//! use imagegen_preflight::requirements::probe::{PathProbe, ToolProbe};
//!
//! let probe = PathProbe::from_env();
//! if !probe.is_tool_available("uv") {
//!     println!("uv not installed");
//! }
//! ```

use std::path::{Path, PathBuf};

/// Capability to detect whether a tool can be invoked.
pub trait ToolProbe {
    /// Whether an executable called `name` is available.
    fn is_tool_available(&self, name: &str) -> bool;
}

/// Probe backed by a list of PATH directories.
#[derive(Debug, Clone)]
pub struct PathProbe {
    entries: Vec<PathBuf>,
}

impl PathProbe {
    /// Probe the directories of the current process's PATH.
    pub fn from_env() -> Self {
        Self::new(parse_system_path())
    }

    /// Probe an explicit list of directories.
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// The directories searched, in order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }
}

impl ToolProbe for PathProbe {
    fn is_tool_available(&self, name: &str) -> bool {
        let found = resolve_tool_path(name, &self.entries);
        tracing::debug!(tool = name, path = ?found, "Probed PATH");
        found.is_some()
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names a tool may have on disk.
fn candidate_names(tool: &str) -> Vec<String> {
    if cfg!(windows) {
        vec![format!("{}.exe", tool), format!("{}.cmd", tool), tool.to_string()]
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
