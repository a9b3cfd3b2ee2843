//! Configuration loading and layering for Folio.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use folio::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let folio_dir = temp.path().join(".folio");
//! fs::create_dir_all(&folio_dir).unwrap();
//! fs::write(folio_dir.join("config.yml"), "settings:\n  host: laptop\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.settings.host, "laptop");
//! ```
//!
//! # Configuration File Locations
//!
//! Folio discovers and merges configuration in this order:
//! 1. User global config (`~/.folio/config.yml`)
//! 2. Project config (`.folio/config.yml`)
//! 3. Local overrides (`.folio/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;

pub use schema::{FolioConfig, OpenPolicy, OutputMode, Settings};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};
