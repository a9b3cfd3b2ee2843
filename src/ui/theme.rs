//! Visual theme and styling.

use console::Style;

use super::ShellPrompt;

/// Folio's visual theme.
#[derive(Debug, Clone)]
pub struct FolioTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
    /// Style for `user@host` in the prompt (green bold).
    pub prompt_user: Style,
    /// Style for the path in the prompt (blue bold).
    pub prompt_path: Style,
    /// Style for `===` section titles in command output (bold).
    pub title: Style,
}

impl Default for FolioTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FolioTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            hint: Style::new().cyan().dim(),
            prompt_user: Style::new().green().bold(),
            prompt_path: Style::new().blue().bold(),
            title: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
            prompt_user: Style::new(),
            prompt_path: Style::new(),
            title: Style::new(),
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

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format the shell prompt, e.g. `amrhany@portfolio:~/games$ `.
    pub fn format_prompt(&self, prompt: &ShellPrompt) -> String {
        format!(
            "{}:{}$ ",
            self.prompt_user
                .apply_to(format!("{}@{}", prompt.user, prompt.host)),
            self.prompt_path.apply_to(&prompt.path)
        )
    }

    /// Format one line of command output. Section titles are emphasized.
    pub fn format_output_line(&self, line: &str) -> String {
        if line.starts_with("===") || line.starts_with("# ") {
            self.title.apply_to(line).to_string()
        } else {
            line.to_string()
        }
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
