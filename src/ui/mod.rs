//! Terminal output.
//!
//! This module provides:
//! - [`ReportPrinter`] for rendering a readiness report
//! - [`StatusKind`] for the `[OK]` / `[WARN]` / `[ERROR]` tag vocabulary
//! - [`PreflightTheme`] and [`should_use_colors`] for styling

pub mod icons;
pub mod printer;
pub mod theme;

pub use icons::StatusKind;
pub use printer::ReportPrinter;
pub use theme::{should_use_colors, PreflightTheme};
