//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The validation command

pub mod args;
pub mod check;

pub use args::{default_target_dir, Cli};
pub use check::{CheckCommand, CommandResult};
