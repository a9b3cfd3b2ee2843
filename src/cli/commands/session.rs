//! Driving a [`Terminal`] from the command line.
//!
//! A [`ShellSession`] feeds lines (or keys) to a terminal session, prints
//! what comes back and performs the requested effects.

use std::io::BufRead;

use crate::error::Result;
use crate::interpreter::{CompletionResult, Reply, Terminal};
use crate::links::{perform_effects, LinkOpener};
use crate::ui::{EditEvent, KeySource, LineEditor, ShellPrompt, UserInterface};

use super::workspace::Workspace;

/// Lines that leave the shell instead of reaching the interpreter.
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Whether `line` leaves the shell.
pub fn is_exit_word(line: &str) -> bool {
    let word = line.trim().to_lowercase();
    EXIT_WORDS.contains(&word.as_str())
}

/// Whether to keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A terminal session bound to the workspace it was started from.
pub struct ShellSession<'a> {
    workspace: &'a Workspace,
    terminal: Terminal,
}

impl<'a> ShellSession<'a> {
    pub fn new(workspace: &'a Workspace, terminal: Terminal) -> Self {
        Self {
            workspace,
            terminal,
        }
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn prompt(&self) -> ShellPrompt {
        self.workspace.prompt(&self.terminal)
    }

    /// Show the welcome banner and record it in the scrollback.
    pub fn welcome(&mut self, ui: &mut dyn UserInterface) {
        self.terminal.welcome();
        if let Some(banner) = self.terminal.history().last() {
            let mut lines = banner.output.iter();
            if let Some(title) = lines.next() {
                ui.show_header(title);
            }
            for line in lines {
                ui.show_hint(line);
            }
        }
    }

    /// Submit one line and show its reply.
    pub fn submit_line(
        &mut self,
        line: &str,
        ui: &mut dyn UserInterface,
        opener: &mut dyn LinkOpener,
    ) -> Flow {
        if is_exit_word(line) {
            return Flow::Exit;
        }

        match self.terminal.submit(line) {
            Reply::Silent => {}
            Reply::Clear => ui.clear_screen(),
            Reply::Output { lines, effects } => {
                ui.show_output(&lines);
                perform_effects(&effects, self.workspace.open_policy(), opener, ui);
            }
        }
        Flow::Continue
    }

    /// Like [`submit_line`](Self::submit_line), but echoes the prompt and
    /// line first in verbose mode. Used when the input is not typed.
    pub fn submit_echoed(
        &mut self,
        line: &str,
        ui: &mut dyn UserInterface,
        opener: &mut dyn LinkOpener,
    ) -> Flow {
        if ui.output_mode().shows_echo() {
            ui.message(&format!("{}{}", self.prompt(), line.trim()));
        }
        self.submit_line(line, ui, opener)
    }

    /// Read lines until end of input or an exit word.
    pub fn run_script<R: BufRead>(
        &mut self,
        reader: R,
        ui: &mut dyn UserInterface,
        opener: &mut dyn LinkOpener,
    ) -> Result<()> {
        for line in reader.lines() {
            if self.submit_echoed(&line?, ui, opener) == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// The interactive loop: edit a line key by key, complete on Tab,
    /// submit on Enter.
    pub fn run_keys(
        &mut self,
        keys: &mut dyn KeySource,
        ui: &mut dyn UserInterface,
        opener: &mut dyn LinkOpener,
    ) -> Result<()> {
        let mut editor = LineEditor::new();
        loop {
            ui.show_prompt(&self.prompt(), editor.buffer());

            match editor.handle_key(keys.read_key()?) {
                EditEvent::Redraw => {}
                EditEvent::Interrupt => ui.finish_prompt(),
                EditEvent::Eof => {
                    ui.finish_prompt();
                    break;
                }
                EditEvent::Complete => {
                    self.terminal.set_input(editor.buffer());
                    if let CompletionResult::Ambiguous { .. } = self.terminal.complete() {
                        ui.finish_prompt();
                        if let Some(listing) = self.terminal.history().last() {
                            ui.show_output(&listing.output);
                        }
                    }
                    editor.set_buffer(self.terminal.input());
                }
                EditEvent::Submit(line) => {
                    ui.finish_prompt();
                    if self.submit_line(&line, ui, opener) == Flow::Exit {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
