//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::FolioConfig;
use crate::error::{FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration directory.
pub const CONFIG_DIR: &str = ".folio";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.folio/config.yml`)
/// 2. Project config (`.folio/config.yml`)
/// 3. Local overrides (`.folio/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.folio/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .folio/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .folio/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .and_then(|home| existing(home.join(CONFIG_DIR).join("config.yml"))),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// The root is the nearest ancestor holding a `.folio` directory, or
/// `start` itself when there is none.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_DIR).is_dir())
        .unwrap_or(start)
        .to_path_buf()
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FolioError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FolioError::Io(e)
        }
    })
}

/// Load a single config file and parse it into FolioConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<FolioConfig> {
    parse_config(&read(path)?, path)
}

/// Parse YAML content into FolioConfig.
pub fn parse_config(content: &str, source_path: &Path) -> Result<FolioConfig> {
    serde_yaml::from_str(content).map_err(|e| FolioError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    serde_yaml::from_str(&read(path)?).map_err(|e| FolioError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all config files for a project.
///
/// Missing files are skipped; with no files at all the defaults apply.
///
/// # Errors
///
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<FolioConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!(path = %path.display(), "Loading config");
        let value = load_config_value(path)?;
        // Empty files parse to null
        if !value.is_null() {
            configs.push(value);
        }
    }

    if configs.is_empty() {
        return Ok(FolioConfig::default());
    }

    serde_yaml::from_value(merge_configs(&configs)).map_err(|e| FolioError::ConfigParseError {
        path: project_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<FolioConfig> {
    match config_override {
        Some(override_path) => load_config_file(override_path),
        None => load_merged_config(project_root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{OpenPolicy, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn project(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        temp
    }

    #[test]
    fn discover_finds_project_config() {
        let temp = project(&[("config.yml", "settings:\n  user: test\n")]);
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project.is_some());
        assert!(paths.has_project_config());
    }

    #[test]
    fn discover_finds_local_overrides() {
        let temp = project(&[("config.yml", ""), ("config.local.yml", "")]);
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project_local.is_some());
    }

    #[test]
    fn discover_returns_none_for_missing_configs() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project.is_none());
        assert!(paths.project_local.is_none());
        assert!(!paths.has_project_config());
    }

    #[test]
    fn all_existing_puts_local_last() {
        let temp = project(&[("config.yml", ""), ("config.local.yml", "")]);
        let paths = ConfigPaths::discover(temp.path());
        let all = paths.all_existing();
        assert!(all.len() >= 2);
        assert!(all.last().unwrap().ends_with("config.local.yml"));
    }

    #[test]
    fn find_project_root_walks_up() {
        let temp = project(&[]);
        let subdir = temp.path().join("foo").join("bar");
        fs::create_dir_all(&subdir).unwrap();
        assert_eq!(find_project_root(&subdir), temp.path());
    }

    #[test]
    fn find_project_root_defaults_to_start() {
        let temp = TempDir::new().unwrap();
        assert_eq!(find_project_root(temp.path()), temp.path());
    }

    #[test]
    fn load_config_file_returns_not_found_error() {
        let result = load_config_file(Path::new("/nonexistent/config.yml"));
        assert!(matches!(result, Err(FolioError::ConfigNotFound { .. })));
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let result = parse_config("invalid: yaml: content: [", Path::new("test.yml"));
        assert!(matches!(result, Err(FolioError::ConfigParseError { .. })));
    }

    #[test]
    fn load_config_file_handles_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "").unwrap();
        assert_eq!(load_config_file(&path).unwrap(), FolioConfig::default());
    }

    #[test]
    fn load_merged_config_without_files_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.settings.host, "portfolio");
    }

    #[test]
    fn load_merged_config_merges_project_and_local() {
        let temp = project(&[
            (
                "config.yml",
                "settings:\n  user: guest\n  default_output: verbose\n",
            ),
            (
                "config.local.yml",
                "settings:\n  default_output: quiet\n  open_links: never\n",
            ),
        ]);

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.settings.user, "guest");
        assert_eq!(config.settings.default_output, OutputMode::Quiet);
        assert_eq!(config.settings.open_links, OpenPolicy::Never);
    }

    #[test]
    fn load_merged_config_skips_empty_files() {
        let temp = project(&[("config.yml", "settings:\n  host: box\n"), ("config.local.yml", "")]);
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.settings.host, "box");
    }

    #[test]
    fn load_merged_config_reports_bad_values() {
        let temp = project(&[("config.yml", "settings:\n  open_links: sometimes\n")]);
        let result = load_merged_config(temp.path());
        assert!(matches!(result, Err(FolioError::ConfigParseError { .. })));
    }

    #[test]
    fn load_config_with_override_skips_merge() {
        let temp = project(&[("config.yml", "settings:\n  user: merged\n")]);
        let override_path = temp.path().join("custom.yml");
        fs::write(&override_path, "settings:\n  host: custom\n").unwrap();

        let config = load_config(temp.path(), Some(&override_path)).unwrap();
        assert_eq!(config.settings.host, "custom");
        assert_eq!(config.settings.user, "amrhany");
    }
}
