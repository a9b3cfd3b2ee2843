//! Integration tests for the folio binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A folio command run from an empty directory, with links disabled.
fn folio(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.current_dir(temp.path());
    cmd.env_remove("FOLIO_CONTENT");
    cmd.env("NO_COLOR", "1");
    cmd.arg("--no-open");
    cmd
}

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let folio_dir = temp.path().join(".folio");
    fs::create_dir_all(&folio_dir).unwrap();
    fs::write(folio_dir.join("config.yml"), config).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("portfolio"))
        .stdout(predicate::str::contains("exec"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_unknown_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn exec_prints_replies() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    folio(&temp)
        .args(["exec", "whoami", "pwd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amrhany"))
        .stdout(predicate::str::contains("/home/amrhany"));
    Ok(())
}

#[test]
fn exec_keeps_directory_between_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    folio(&temp)
        .args(["exec", "cd games", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changed directory to games"))
        .stdout(predicate::str::contains("🎮 matrix.exe"))
        .stdout(predicate::str::contains("🎮 easter-egg.sh"))
        .stdout(predicate::str::contains("📄 readme.txt"));
    Ok(())
}

#[test]
fn exec_unknown_command_suggests() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    folio(&temp)
        .args(["exec", "projetcs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Command 'projetcs' not found. 🤔"))
        .stdout(predicate::str::contains("projects"));
    Ok(())
}

#[test]
fn exec_json_prints_history() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = folio(&temp)
        .args(["exec", "--json", "cd skills", "pwd"])
        .output()?;
    assert!(output.status.success());

    let history: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["input"], "pwd");
    assert_eq!(entries[1]["output"][0], "/home/amrhany/skills");
    Ok(())
}

#[test]
fn exec_verbose_echoes_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    folio(&temp)
        .args(["-v", "exec", "cd games", "pwd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amrhany@portfolio:~/games$ pwd"));
    Ok(())
}

#[test]
fn exec_silent_default_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  default_output: silent\n");
    folio(&temp)
        .args(["exec", "help"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn complete_single_candidate() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    folio(&temp)
        .args(["complete", "pr"])
        .assert()
        .success()
        .stdout("projects \n");
    Ok(())
}

#[test]
fn complete_in_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    folio(&temp)
        .args(["complete", "cat fr", "--dir", "skills"])
        .assert()
        .success()
        .stdout("cat frontend.txt\n");
    Ok(())
}

#[test]
fn complete_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    folio(&temp)
        .args(["complete", "c", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": \"ambiguous\""))
        .stdout(predicate::str::contains("\"contact\""));
    Ok(())
}

#[test]
fn content_json_and_schema() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    folio(&temp)
        .args(["content", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Falcony Search Engine\""));
    folio(&temp)
        .args(["content", "--schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"properties\""));
    Ok(())
}

#[test]
fn content_file_overrides_builtin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let builtin = folio(&temp).args(["content", "--yaml"]).output()?;
    let yaml = String::from_utf8(builtin.stdout)?.replace("Amr Hany", "Jane Doe");
    fs::write(temp.path().join("me.yml"), yaml)?;

    folio(&temp)
        .args(["--content", "me.yml", "exec", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== About Jane Doe ==="));
    Ok(())
}

#[test]
fn bad_content_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("broken.yml"), "hero: [")?;
    folio(&temp)
        .args(["--content", "broken.yml", "exec", "about"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗ Error"));
    Ok(())
}

#[test]
fn bad_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings: [unclosed");
    folio(&temp)
        .args(["exec", "help"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗ Error"));
    Ok(())
}

#[test]
fn config_shows_settings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  host: laptop\n");
    folio(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("host: laptop"))
        .stdout(predicate::str::contains("open_links: never"));
    Ok(())
}

#[test]
fn config_user_changes_prompt_and_pwd() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  user: guest\n");
    folio(&temp)
        .args(["exec", "pwd"])
        .assert()
        .success()
        .stdout("/home/guest\n");
    Ok(())
}

#[test]
fn shell_reads_stdin_without_tty() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    folio(&temp)
        .arg("shell")
        .write_stdin("cd projects\ncat 1-falcony-search-engine.md\nexit\nwhoami\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Amr Hany's Interactive Terminal!"))
        .stdout(predicate::str::contains("# Falcony Search Engine"))
        .stdout(predicate::str::contains("**Repository:**"));
    Ok(())
}

#[test]
fn no_subcommand_runs_shell() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  welcome: false\n");
    folio(&temp)
        .write_stdin("pwd\n")
        .assert()
        .success()
        .stdout("/home/amrhany\n");
    Ok(())
}

#[test]
fn completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("folio"));
    Ok(())
}
