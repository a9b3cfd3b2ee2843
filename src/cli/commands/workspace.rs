//! Startup state shared by the commands that need a portfolio.

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::config::{load_config, FolioConfig, OpenPolicy, Settings};
use crate::content::{resolve_content, ContentStore};
use crate::error::Result;
use crate::interpreter::Terminal;
use crate::ui::{OutputMode, ShellPrompt, UserInterface};

/// Global flags that affect how the workspace is loaded.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// `--config`
    pub config: Option<PathBuf>,
    /// `--content` / `FOLIO_CONTENT`
    pub content: Option<PathBuf>,
    /// `--no-open`
    pub no_open: bool,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            content: cli.content.clone(),
            no_open: cli.no_open,
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Workspace {
    project_root: PathBuf,
    settings: Settings,
    content_override: Option<PathBuf>,
}

impl Workspace {
    /// Load configuration for `project_root`.
    ///
    /// The configured `default_output` applies when no CLI flag changed the
    /// output mode.
    pub fn load(
        project_root: &Path,
        options: &GlobalOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<Self> {
        let config = load_config(project_root, options.config.as_deref())?;
        Ok(Self::from_config(project_root, config, options, ui))
    }

    /// Build a workspace from an already loaded config.
    pub fn from_config(
        project_root: &Path,
        config: FolioConfig,
        options: &GlobalOptions,
        ui: &mut dyn UserInterface,
    ) -> Self {
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        let mut settings = config.settings;
        if options.no_open {
            settings.open_links = OpenPolicy::Never;
        }

        Self {
            project_root: project_root.to_path_buf(),
            settings,
            content_override: options.content.clone(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn open_policy(&self) -> OpenPolicy {
        self.settings.open_links
    }

    /// Load and validate the portfolio content.
    pub fn content(&self) -> Result<ContentStore> {
        resolve_content(
            self.content_override.as_deref(),
            &self.settings,
            &self.project_root,
        )
    }

    /// Start a terminal session over the content, without a banner.
    pub fn terminal(&self) -> Result<Terminal> {
        Ok(Terminal::new(self.content()?, self.settings.user.clone()))
    }

    /// The prompt for a session currently in `terminal`'s directory.
    pub fn prompt(&self, terminal: &Terminal) -> ShellPrompt {
        ShellPrompt {
            user: terminal.user().to_string(),
            host: self.settings.host.clone(),
            path: terminal.directory().prompt_path(),
        }
    }
}
