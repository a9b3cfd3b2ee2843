//! Folio - A portfolio you explore like a shell.
//!
//! Folio presents a personal portfolio as a small terminal: a fixed tree of
//! virtual directories holding generated files, a handful of commands to
//! read them, and tab completion. The interpreter is pure; the CLI drives it
//! from a TTY, stdin, or one-shot subcommands.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading and merging
//! - [`content`] - Portfolio content: schema, loading, validation
//! - [`error`] - Error types and result aliases
//! - [`interpreter`] - Command interpretation, completion and sessions
//! - [`links`] - Opening links requested by commands
//! - [`ui`] - Terminal output, prompts and the line editor
//! - [`vfs`] - The virtual directory tree
//!
//! # Example
//!
//! ```
//! use folio::content::builtin;
//! use folio::interpreter::Terminal;
//!
//! let mut terminal = Terminal::new(builtin::load().unwrap(), "amrhany");
//! let reply = terminal.submit("cd projects");
//! assert_eq!(reply.output(), ["Changed directory to projects"]);
//!
//! terminal.set_input("cat 1");
//! terminal.complete();
//! assert_eq!(terminal.input(), "cat 1-falcony-search-engine.md");
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod interpreter;
pub mod links;
pub mod ui;
pub mod vfs;

pub use error::{FolioError, Result};
