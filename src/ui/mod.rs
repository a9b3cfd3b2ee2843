//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped or headless runs
//! - [`MockUI`] for tests
//! - [`LineEditor`], the key-driven input line of the shell
//!
//! # Example
//!
//! ```
//! use folio::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Portfolio");
//! ui.show_output(&["about".to_string()]);
//! ```

pub mod line_editor;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use line_editor::{EditEvent, KeySource, LineEditor};
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_confirm;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, FolioTheme};

use std::fmt;

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode, e.g. to the configured default.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a dim contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Print the output lines of a command.
    fn show_output(&mut self, lines: &[String]);

    /// Draw the shell prompt followed by the current input, replacing the
    /// line being edited.
    fn show_prompt(&mut self, prompt: &ShellPrompt, input: &str);

    /// End the line being edited.
    fn finish_prompt(&mut self);

    /// Wipe the screen.
    fn clear_screen(&mut self);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// The shell prompt: `user@host:path$ `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellPrompt {
    pub user: String,
    pub host: String,
    /// `~` or `~/dir`.
    pub path: String,
}

impl fmt::Display for ShellPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}$ ", self.user, self.host, self.path)
    }
}

/// A yes/no question to put to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt, used for env overrides and mock answers.
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer when the user just presses enter or cannot be asked.
    pub default: bool,
}

impl Prompt {
    pub fn confirm(key: impl Into<String>, question: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
            default,
        }
    }
}

/// Parse a yes/no answer. Unrecognized text is `None`.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
