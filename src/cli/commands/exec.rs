//! Exec command implementation.
//!
//! `folio exec <LINE>...` submits each line to one session, the way they
//! would be typed at the prompt.

use std::path::{Path, PathBuf};

use crate::cli::args::ExecArgs;
use crate::error::{FolioError, Result};
use crate::links::{LinkOpener, SystemOpener};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session::{is_exit_word, Flow, ShellSession};
use super::workspace::{GlobalOptions, Workspace};

/// The exec command implementation.
pub struct ExecCommand {
    project_root: PathBuf,
    options: GlobalOptions,
    args: ExecArgs,
}

impl ExecCommand {
    /// Create a new exec command.
    pub fn new(project_root: &Path, options: GlobalOptions, args: ExecArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }

    /// Run the lines with a specific link opener.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        opener: &mut dyn LinkOpener,
    ) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root, &self.options, ui)?;

        // Machine output: only the history, and links stay closed.
        if self.args.json {
            let mut terminal = workspace.terminal()?;
            for line in self.args.lines.iter().take_while(|l| !is_exit_word(l)) {
                terminal.submit(line);
            }
            let json = serde_json::to_string_pretty(terminal.history())
                .map_err(|e| FolioError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let mut session = ShellSession::new(&workspace, workspace.terminal()?);
        for line in &self.args.lines {
            if session.submit_echoed(line, ui, opener) == Flow::Exit {
                break;
            }
        }
        Ok(CommandResult::success())
    }
}

impl Command for ExecCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &mut SystemOpener)
    }
}
