//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`folio shell`, `folio exec`)
//! - Shared startup through [`Workspace`]
//! - Consistent global flag handling

pub mod complete;
pub mod completions;
pub mod config;
pub mod content;
pub mod dispatcher;
pub mod exec;
pub mod session;
pub mod shell;
pub mod workspace;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use session::{Flow, ShellSession};
pub use workspace::{GlobalOptions, Workspace};
