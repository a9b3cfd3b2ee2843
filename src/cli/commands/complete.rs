//! Complete command implementation.
//!
//! `folio complete <BUFFER>` runs tab completion once, outside a session.

use std::path::{Path, PathBuf};

use crate::cli::args::CompleteArgs;
use crate::error::{FolioError, Result};
use crate::interpreter::complete::complete;
use crate::interpreter::CompletionResult;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::{GlobalOptions, Workspace};

/// The complete command implementation.
pub struct CompleteCommand {
    project_root: PathBuf,
    options: GlobalOptions,
    args: CompleteArgs,
}

impl CompleteCommand {
    /// Create a new complete command.
    pub fn new(project_root: &Path, options: GlobalOptions, args: CompleteArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }
}

impl Command for CompleteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root, &self.options, ui)?;
        let content = workspace.content()?;
        let result = complete(&self.args.buffer, self.args.dir, &content);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&result).map_err(|e| FolioError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        // First line is always the buffer after completion.
        match result {
            CompletionResult::NoMatch => ui.message(&self.args.buffer),
            CompletionResult::Completed { buffer } => ui.message(&buffer),
            CompletionResult::Ambiguous { buffer, candidates } => {
                ui.message(&buffer);
                for candidate in candidates {
                    ui.message(&format!("   {}", candidate));
                }
            }
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use crate::vfs::VirtualDirectory;
    use tempfile::TempDir;

    fn run(buffer: &str, dir: VirtualDirectory, json: bool) -> MockUI {
        let temp = TempDir::new().unwrap();
        let args = CompleteArgs {
            buffer: buffer.to_string(),
            dir,
            json,
        };
        let cmd = CompleteCommand::new(temp.path(), GlobalOptions::default(), args);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        ui
    }

    #[test]
    fn single_candidate_prints_completed_buffer() {
        let ui = run("pr", VirtualDirectory::Home, false);
        assert_eq!(ui.messages(), ["projects "]);
    }

    #[test]
    fn ambiguous_prints_candidates() {
        let ui = run("c", VirtualDirectory::Home, false);
        assert_eq!(ui.messages()[0], "c");
        assert!(ui.has_message("   clear"));
        assert!(ui.has_message("   contact"));
    }

    #[test]
    fn no_match_echoes_buffer() {
        let ui = run("zzz", VirtualDirectory::Home, false);
        assert_eq!(ui.messages(), ["zzz"]);
    }

    #[test]
    fn directory_changes_candidates() {
        let ui = run("cat 1", VirtualDirectory::Projects, false);
        assert_eq!(ui.messages(), ["cat 1-falcony-search-engine.md"]);
    }

    #[test]
    fn json_is_tagged() {
        let ui = run("pr", VirtualDirectory::Home, true);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["result"], "completed");
        assert_eq!(value["buffer"], "projects ");
    }
}
