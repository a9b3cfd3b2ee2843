//! A terminal session: the interpreter plus its state.

use chrono::Local;

use crate::content::ContentStore;
use crate::vfs::VirtualDirectory;

use super::commands::CommandContext;
use super::complete::{complete, CompletionResult};
use super::dispatch::interpret;
use super::reply::Reply;
use super::session::{HistoryEntry, HistoryKind, SessionState};

/// One interactive session over a content store.
///
/// Owns the session state; every submission is applied before the next
/// one is accepted.
#[derive(Debug, Clone)]
pub struct Terminal {
    content: ContentStore,
    user: String,
    session: SessionState,
}

impl Terminal {
    /// Start a session in `home` with an empty scrollback.
    pub fn new(content: ContentStore, user: impl Into<String>) -> Self {
        Self {
            content,
            user: user.into(),
            session: SessionState::default(),
        }
    }

    /// Seed the scrollback with the welcome banner.
    pub fn welcome(&mut self) {
        let lines = vec![
            format!("Welcome to {}'s Interactive Terminal! 🚀", self.content.hero.name),
            String::new(),
            "Type 'help' to see available commands.".to_string(),
            "Navigate through my portfolio using CLI commands!".to_string(),
        ];
        self.session.push(HistoryKind::Banner, String::new(), lines);
    }

    /// Submit one line and apply its effect on the session.
    ///
    /// The pending input buffer is cleared afterwards.
    pub fn submit(&mut self, raw: &str) -> Reply {
        let ctx = CommandContext {
            content: &self.content,
            directory: self.session.directory,
            user: &self.user,
            now: Local::now(),
        };
        let interpretation = interpret(&ctx, raw);
        tracing::debug!(input = raw, directory = %self.session.directory, "Submitted line");

        match &interpretation.reply {
            Reply::Silent => {}
            Reply::Clear => self.session.history.clear(),
            Reply::Output { lines, .. } => {
                self.session
                    .push(HistoryKind::Command, raw.trim().to_string(), lines.clone());
            }
        }
        if let Some(directory) = interpretation.directory {
            self.session.directory = directory;
        }
        self.session.pending_input.clear();
        interpretation.reply
    }

    /// Tab-complete the pending input buffer.
    ///
    /// Ambiguous results also append the candidate listing to the
    /// scrollback.
    pub fn complete(&mut self) -> CompletionResult {
        let buffer = self.session.pending_input.clone();
        let result = complete(&buffer, self.session.directory, &self.content);
        match &result {
            CompletionResult::NoMatch => {}
            CompletionResult::Completed { buffer } => {
                self.session.pending_input = buffer.clone();
            }
            CompletionResult::Ambiguous {
                buffer: extended,
                candidates,
            } => {
                self.session.pending_input = extended.clone();
                let mut lines = vec!["🔍 Autocomplete suggestions:".to_string(), String::new()];
                lines.extend(candidates.iter().map(|c| format!("   {}", c)));
                lines.push(String::new());
                lines.push("💡 Press Tab again or continue typing to narrow down.".to_string());
                self.session.push(
                    HistoryKind::Completion,
                    format!("tab completion for \"{}\"", buffer),
                    lines,
                );
            }
        }
        result
    }

    /// Replace the pending input buffer.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.session.pending_input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.session.pending_input
    }

    pub fn directory(&self) -> VirtualDirectory {
        self.session.directory
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.session.history
    }

    /// Number of submitted commands still in the scrollback.
    pub fn command_count(&self) -> usize {
        self.session.command_count()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }
}
