//! The command interpreter.
//!
//! Lines are parsed by [`parser`], routed by [`dispatch`] through the
//! [`commands`] table and the directory-specific handlers, and produce a
//! [`Reply`]. [`Terminal`] owns the session state and applies replies to it.
//!
//! Interpretation never fails; unknown input becomes an informative reply.
//!
//! # Example
//!
//! ```
//! use folio::content::builtin;
//! use folio::interpreter::Terminal;
//! use folio::vfs::VirtualDirectory;
//!
//! let mut terminal = Terminal::new(builtin::load().unwrap(), "amrhany");
//! terminal.submit("cd games");
//! assert_eq!(terminal.directory(), VirtualDirectory::Games);
//!
//! let reply = terminal.submit("pwd");
//! assert_eq!(reply.output(), ["/home/amrhany/games"]);
//! ```

pub mod commands;
pub mod complete;
pub mod dispatch;
mod files;
mod games;
mod navigation;
pub mod parser;
pub mod reply;
pub mod session;
mod suggest;
pub mod terminal;

pub use commands::{CommandContext, COMMANDS};
pub use complete::{common_prefix, CompletionResult};
pub use dispatch::interpret;
pub use reply::{Effect, Interpretation, Reply};
pub use session::{HistoryEntry, HistoryKind, SessionState};
pub use suggest::suggestions;
pub use terminal::Terminal;
