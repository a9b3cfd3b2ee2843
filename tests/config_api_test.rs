//! Integration tests for config module public API.

use folio::config::{
    find_project_root, load_config, load_merged_config, FolioConfig, OpenPolicy, OutputMode,
    CONFIG_DIR,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let config = FolioConfig::default();
    assert_eq!(config.settings.user, "amrhany");
    assert_eq!(config.settings.open_links, OpenPolicy::Always);
    let _mode = OutputMode::Verbose;
}

#[test]
fn config_merge_workflow() {
    let temp = TempDir::new().unwrap();
    let folio_dir = temp.path().join(CONFIG_DIR);
    fs::create_dir_all(&folio_dir).unwrap();

    fs::write(
        folio_dir.join("config.yml"),
        r#"
settings:
  user: guest
  host: demo
  open_links: ask
"#,
    )
    .unwrap();

    fs::write(
        folio_dir.join("config.local.yml"),
        r#"
settings:
  open_links: never
  default_output: quiet
"#,
    )
    .unwrap();

    let config = load_merged_config(temp.path()).unwrap();
    assert_eq!(config.settings.user, "guest");
    assert_eq!(config.settings.host, "demo");
    assert_eq!(config.settings.open_links, OpenPolicy::Never);
    assert_eq!(config.settings.default_output, OutputMode::Quiet);
}

#[test]
fn explicit_config_skips_discovery() {
    let temp = TempDir::new().unwrap();
    let folio_dir = temp.path().join(CONFIG_DIR);
    fs::create_dir_all(&folio_dir).unwrap();
    fs::write(folio_dir.join("config.yml"), "settings:\n  user: ignored\n").unwrap();

    let explicit = temp.path().join("other.yml");
    fs::write(&explicit, "settings:\n  host: elsewhere\n").unwrap();

    let config = load_config(temp.path(), Some(&explicit)).unwrap();
    assert_eq!(config.settings.user, "amrhany");
    assert_eq!(config.settings.host, "elsewhere");
}

#[test]
fn project_root_is_found_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(CONFIG_DIR)).unwrap();
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_project_root(&nested), temp.path());
}
