//! Content command implementation.
//!
//! The `folio content` command shows the portfolio content in use, or the
//! schema content files must follow.

use std::path::{Path, PathBuf};

use crate::cli::args::ContentArgs;
use crate::content::json_schema;
use crate::error::{FolioError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::{GlobalOptions, Workspace};

/// The content command implementation.
pub struct ContentCommand {
    project_root: PathBuf,
    options: GlobalOptions,
    args: ContentArgs,
}

impl ContentCommand {
    /// Create a new content command.
    pub fn new(project_root: &Path, options: GlobalOptions, args: ContentArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }
}

impl Command for ContentCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let json = serde_json::to_string_pretty(&json_schema())
                .map_err(|e| FolioError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let workspace = Workspace::load(&self.project_root, &self.options, ui)?;
        let content = workspace.content()?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&content).map_err(|e| FolioError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml = serde_yaml::to_string(&content).map_err(|e| FolioError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(options: GlobalOptions, args: ContentArgs) -> (Result<CommandResult>, MockUI) {
        let temp = TempDir::new().unwrap();
        let cmd = ContentCommand::new(temp.path(), options, args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui);
        (result, ui)
    }

    #[test]
    fn yaml_by_default() {
        let (result, ui) = run(GlobalOptions::default(), ContentArgs::default());
        assert!(result.unwrap().success);
        let content: ContentStore = serde_yaml::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(content.hero.name, "Amr Hany");
    }

    #[test]
    fn json_output() {
        let args = ContentArgs {
            json: true,
            ..Default::default()
        };
        let (_, ui) = run(GlobalOptions::default(), args);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["projects"][0]["name"], "Falcony Search Engine");
    }

    #[test]
    fn schema_output() {
        let args = ContentArgs {
            schema: true,
            ..Default::default()
        };
        let (_, ui) = run(GlobalOptions::default(), args);
        assert!(ui.has_message("\"properties\""));
        assert!(ui.has_message("resume_link"));
    }

    #[test]
    fn content_override_is_used() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("me.json");
        let mut content = crate::content::builtin::load().unwrap();
        content.hero.name = "Jane Doe".to_string();
        fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        let options = GlobalOptions {
            content: Some(path),
            ..Default::default()
        };
        let (_, ui) = run(options, ContentArgs::default());
        assert!(ui.has_message("Jane Doe"));
    }
}
