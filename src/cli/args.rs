//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::vfs::VirtualDirectory;

/// Folio - A portfolio you explore like a shell.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Portfolio content file (YAML or JSON) instead of the built-in one
    #[arg(long, global = true, env = "FOLIO_CONTENT", value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Path to config file (overrides default .folio/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Never open links (resume)
    #[arg(long, global = true)]
    pub no_open: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive terminal (default if no command specified)
    Shell(ShellArgs),

    /// Run command lines in one session and print their output
    Exec(ExecArgs),

    /// Tab-complete a partial command line
    Complete(CompleteArgs),

    /// Show the portfolio content in use
    Content(ContentArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `shell` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShellArgs {
    /// Skip the welcome banner
    #[arg(long)]
    pub no_welcome: bool,
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExecArgs {
    /// Command lines, submitted in order
    #[arg(required = true, value_name = "LINE")]
    pub lines: Vec<String>,

    /// Print the session history as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `complete` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CompleteArgs {
    /// The partial command line
    #[arg(allow_hyphen_values = true)]
    pub buffer: String,

    /// Directory the line is typed in
    #[arg(long, default_value = "home")]
    pub dir: VirtualDirectory,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `content` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ContentArgs {
    /// Output as JSON
    #[arg(long, conflicts_with_all = ["yaml", "schema"])]
    pub json: bool,

    /// Output as YAML (default)
    #[arg(long, conflicts_with = "schema")]
    pub yaml: bool,

    /// Print the JSON Schema of content files instead
    #[arg(long)]
    pub schema: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_open);
    }

    #[test]
    fn exec_collects_lines() {
        let cli = Cli::try_parse_from(["folio", "exec", "cd games", "ls", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Exec(args)) => {
                assert_eq!(args.lines, ["cd games", "ls"]);
                assert!(args.json);
            }
            other => panic!("expected exec, got {:?}", other),
        }
    }

    #[test]
    fn exec_requires_a_line() {
        assert!(Cli::try_parse_from(["folio", "exec"]).is_err());
    }

    #[test]
    fn complete_parses_directory() {
        let cli = Cli::try_parse_from(["folio", "complete", "cat 1", "--dir", "projects"]).unwrap();
        match cli.command {
            Some(Commands::Complete(args)) => {
                assert_eq!(args.buffer, "cat 1");
                assert_eq!(args.dir, VirtualDirectory::Projects);
            }
            other => panic!("expected complete, got {:?}", other),
        }
    }

    #[test]
    fn complete_defaults_to_home() {
        let cli = Cli::try_parse_from(["folio", "complete", "pr"]).unwrap();
        match cli.command {
            Some(Commands::Complete(args)) => assert_eq!(args.dir, VirtualDirectory::Home),
            other => panic!("expected complete, got {:?}", other),
        }
    }

    #[test]
    fn complete_rejects_unknown_directory() {
        assert!(Cli::try_parse_from(["folio", "complete", "ls", "--dir", "etc"]).is_err());
    }

    #[test]
    fn content_formats_conflict() {
        assert!(Cli::try_parse_from(["folio", "content", "--json", "--schema"]).is_err());
        assert!(Cli::try_parse_from(["folio", "content", "--yaml"]).is_ok());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "shell", "--no-open", "-q"]).unwrap();
        assert!(cli.no_open);
        assert!(cli.quiet);
    }
}
