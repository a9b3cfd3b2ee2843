//! The shell's input line.
//!
//! [`LineEditor`] is a key-driven state machine: it owns the buffer and the
//! recall list and turns each key into an [`EditEvent`]. Drawing is left to
//! the caller, so the editor works the same against a real terminal or a
//! scripted key sequence.

use console::{Key, Term};

/// Ctrl-D as delivered by `console`.
const CTRL_D: char = '\u{4}';

/// Where keys come from.
pub trait KeySource {
    fn read_key(&mut self) -> std::io::Result<Key>;
}

impl KeySource for Term {
    /// Raw read, so Ctrl-C arrives as [`Key::CtrlC`] instead of a signal.
    fn read_key(&mut self) -> std::io::Result<Key> {
        Term::read_key_raw(self)
    }
}

/// What a key did to the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// The buffer changed (or may have); redraw it.
    Redraw,
    /// Enter was pressed; the line is handed over and the buffer emptied.
    Submit(String),
    /// Tab was pressed; complete the current buffer.
    Complete,
    /// Ctrl-C: the buffer was discarded.
    Interrupt,
    /// Ctrl-D on an empty line.
    Eof,
}

/// Editable input line with recall of submitted lines.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buffer: String,
    recall: Vec<String>,
    /// Position in `recall` while browsing with the arrow keys.
    recall_index: Option<usize>,
    /// What was typed before browsing started.
    draft: String,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer, e.g. with a completion.
    pub fn set_buffer(&mut self, buffer: impl Into<String>) {
        self.buffer = buffer.into();
        self.recall_index = None;
    }

    /// Previously submitted non-blank lines, oldest first.
    pub fn recall(&self) -> &[String] {
        &self.recall
    }

    pub fn handle_key(&mut self, key: Key) -> EditEvent {
        match key {
            Key::Enter => self.submit(),
            Key::Tab => EditEvent::Complete,
            Key::CtrlC => {
                self.buffer.clear();
                self.recall_index = None;
                EditEvent::Interrupt
            }
            Key::Char(CTRL_D) => {
                if self.buffer.is_empty() {
                    EditEvent::Eof
                } else {
                    EditEvent::Redraw
                }
            }
            Key::Char(c) if !c.is_control() => {
                self.buffer.push(c);
                self.recall_index = None;
                EditEvent::Redraw
            }
            Key::Backspace => {
                self.buffer.pop();
                EditEvent::Redraw
            }
            Key::ArrowUp => {
                self.recall_older();
                EditEvent::Redraw
            }
            Key::ArrowDown => {
                self.recall_newer();
                EditEvent::Redraw
            }
            _ => EditEvent::Redraw,
        }
    }

    fn submit(&mut self) -> EditEvent {
        let line = std::mem::take(&mut self.buffer);
        self.recall_index = None;
        self.draft.clear();
        if !line.trim().is_empty() && self.recall.last() != Some(&line) {
            self.recall.push(line.clone());
        }
        EditEvent::Submit(line)
    }

    fn recall_older(&mut self) {
        let index = match self.recall_index {
            None if self.recall.is_empty() => return,
            None => {
                self.draft = self.buffer.clone();
                self.recall.len() - 1
            }
            Some(index) => index.saturating_sub(1),
        };
        self.recall_index = Some(index);
        self.buffer = self.recall[index].clone();
    }

    fn recall_newer(&mut self) {
        let Some(index) = self.recall_index else {
            return;
        };
        if index + 1 < self.recall.len() {
            self.recall_index = Some(index + 1);
            self.buffer = self.recall[index + 1].clone();
        } else {
            self.recall_index = None;
            self.buffer = std::mem::take(&mut self.draft);
        }
    }
}
