//! Visual theme and styling.

use console::Style;

/// Styles used by the report printer.
#[derive(Debug, Clone)]
pub struct PreflightTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failures and internal errors (red bold).
    pub error: Style,
    /// Style for the header line (bold magenta).
    pub header: Style,
    /// Style for remediation lines (dim).
    pub hint: Style,
    /// Style for highlighted text such as paths (bold).
    pub highlight: Style,
}

impl Default for PreflightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PreflightTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            hint: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format the header line naming the directory under validation.
    pub fn format_header(&self, target: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("Checking image generation environment in"),
            self.highlight.apply_to(target)
        )
    }

    /// Format a remediation line.
    pub fn format_hint(&self, line: &str) -> String {
        format!("  {}", self.hint.apply_to(line))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
