//! Config command implementation.
//!
//! The `folio config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{ConfigPaths, FolioConfig};
use crate::error::{FolioError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::{GlobalOptions, Workspace};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    options: GlobalOptions,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, options: GlobalOptions, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Files the configuration came from.
    fn sources(&self) -> Vec<PathBuf> {
        match &self.options.config {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workspace = Workspace::load(&self.project_root, &self.options, ui)?;
        let config = FolioConfig {
            settings: workspace.settings().clone(),
        };

        // Show config file path(s)
        let sources = self.sources();
        if !sources.is_empty() {
            for path in &sources {
                ui.message(&format!("# {}", path.display()));
            }
            ui.message("");
        }

        // Output format
        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| FolioError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml = serde_yaml::to_string(&config).map_err(|e| FolioError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
