//! Shell command implementation.
//!
//! `folio shell` (the default) runs the interactive terminal. On a TTY it
//! reads keys through the line editor; otherwise every stdin line is
//! submitted in order.

use std::path::{Path, PathBuf};

use console::Term;

use crate::cli::args::ShellArgs;
use crate::error::Result;
use crate::links::SystemOpener;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::session::ShellSession;
use super::workspace::{GlobalOptions, Workspace};

/// The shell command implementation.
pub struct ShellCommand {
    project_root: PathBuf,
    options: GlobalOptions,
    args: ShellArgs,
}

impl ShellCommand {
    /// Create a new shell command.
    pub fn new(project_root: &Path, options: GlobalOptions, args: ShellArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }

    pub fn args(&self) -> &ShellArgs {
        &self.args
    }
}

impl Command for ShellCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root, &self.options, ui)?;
        let mut session = ShellSession::new(&workspace, workspace.terminal()?);

        if workspace.settings().welcome && !self.args.no_welcome {
            session.welcome(ui);
        }

        let mut opener = SystemOpener;
        if ui.is_interactive() {
            tracing::debug!("Starting interactive shell");
            session.run_keys(&mut Term::stdout(), ui, &mut opener)?;
        } else {
            tracing::debug!("Reading commands from stdin");
            session.run_script(std::io::stdin().lock(), ui, &mut opener)?;
        }

        tracing::debug!(
            commands = session.terminal().command_count(),
            "Shell session ended"
        );
        Ok(CommandResult::success())
    }
}
