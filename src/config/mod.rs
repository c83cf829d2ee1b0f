//! Configuration for a validation run.
//!
//! - [`schema`] - [`PreflightConfig`] and the `preflight.yml` override shape
//! - [`loader`] - Building a configuration for a target directory
//! - [`env_file`] - `.env` parsing

pub mod env_file;
pub mod loader;
pub mod schema;

pub use env_file::EnvFileParser;
pub use loader::{load_config, load_overrides, overrides_path, OVERRIDES_FILE};
pub use schema::{
    ConfigOverrides, PreflightConfig, DEFAULT_PLACEHOLDERS, DEFAULT_REQUIRED_KEY, FALLBACK_PACKAGES,
};
