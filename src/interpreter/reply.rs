//! What a submitted line produces.

use serde::Serialize;

use crate::vfs::VirtualDirectory;

/// A side effect the host environment should perform.
///
/// The interpreter never performs effects itself; it only describes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum Effect {
    /// Open a link in a new browsing context.
    OpenLink(String),
}

/// The reply to one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing happens (blank input).
    Silent,
    /// Lines to append to the scrollback, plus any effects to run.
    Output {
        lines: Vec<String>,
        effects: Vec<Effect>,
    },
    /// Wipe the scrollback.
    Clear,
}

impl Reply {
    /// Plain output without effects.
    pub fn lines(lines: Vec<String>) -> Self {
        Self::Output {
            lines,
            effects: Vec::new(),
        }
    }

    /// The output lines, empty for `Silent` and `Clear`.
    pub fn output(&self) -> &[String] {
        match self {
            Self::Output { lines, .. } => lines,
            Self::Silent | Self::Clear => &[],
        }
    }

    /// The effects, empty for `Silent` and `Clear`.
    pub fn effects(&self) -> &[Effect] {
        match self {
            Self::Output { effects, .. } => effects,
            Self::Silent | Self::Clear => &[],
        }
    }
}

/// Result of interpreting one line against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub reply: Reply,
    /// New current directory, if the line changed it.
    pub directory: Option<VirtualDirectory>,
}

impl Interpretation {
    /// A reply that leaves the directory alone.
    pub fn reply(reply: Reply) -> Self {
        Self {
            reply,
            directory: None,
        }
    }

    /// Output lines that leave the directory alone.
    pub fn lines(lines: Vec<String>) -> Self {
        Self::reply(Reply::lines(lines))
    }
}
