//! Configuration schema definitions for Folio.
//!
//! These structs map to the YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Root configuration structure for `.folio/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Global settings
    pub settings: Settings,
}

/// Settings for the terminal session and its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// User name shown by `pwd`, `whoami`, `ls -l` and the prompt
    #[serde(default = "default_user")]
    pub user: String,

    /// Host name shown by the prompt
    #[serde(default = "default_host")]
    pub host: String,

    /// Seed the scrollback with the welcome banner
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub welcome: bool,

    /// Whether `resume` opens its link
    pub open_links: OpenPolicy,

    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,

    /// Content file to load instead of the embedded default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            welcome: true,
            open_links: OpenPolicy::default(),
            default_output: OutputMode::default(),
            content: None,
        }
    }
}

fn default_user() -> String {
    "amrhany".to_string()
}

fn default_host() -> String {
    "portfolio".to_string()
}

fn default_true() -> bool {
    true
}

fn is_true(v: &bool) -> bool {
    *v
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// When links requested by a command are opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenPolicy {
    /// Open without asking.
    #[default]
    Always,
    /// Ask for confirmation first.
    Ask,
    /// Only print the link.
    Never,
}

impl fmt::Display for OpenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Always => "always",
            Self::Ask => "ask",
            Self::Never => "never",
        })
    }
}

impl FromStr for OpenPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "ask" => Ok(Self::Ask),
            "never" => Ok(Self::Never),
            _ => Err(format!("unknown open policy: {}", s)),
        }
    }
}
