//! Visual theme and styling.

use console::Style;

/// apkctl's visual theme.
#[derive(Debug, Clone)]
pub struct ApkctlTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (bold).
    pub header: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
}

impl Default for ApkctlTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ApkctlTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            command: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a banner with an underline as wide as the title.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(title.chars().count());
        format!(
            "{}\n{}",
            self.header.apply_to(title),
            self.dim.apply_to(rule)
        )
    }
}

impl ApkctlTheme {
    /// Frame a failed command and its captured output.
    ///
    /// The output is written between the frame lines exactly as captured,
    /// line endings included; only a final newline is added when missing.
    pub fn format_error_block(&self, command: &str, output: &str, hint: Option<&str>) -> String {
        let b = &self.border;
        let mut block = format!(
            "    {} {}\n    {} {}\n",
            b.apply_to("┌─"),
            b.apply_to("Command ──────────────────────────"),
            b.apply_to("│"),
            self.command.apply_to(command)
        );

        if !output.is_empty() {
            block.push_str(&format!(
                "    {} {}\n",
                b.apply_to("├─"),
                b.apply_to("Output ───────────────────────────")
            ));
            block.push_str(output);
            if !output.ends_with('\n') {
                block.push('\n');
            }
        }

        block.push_str(&format!(
            "    {}\n",
            b.apply_to("└────────────────────────────────────")
        ));

        if let Some(h) = hint {
            block.push_str(&format!("\n    {}\n", self.hint.apply_to(h)));
        }
        block
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
