//! Per-session mutable state.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::vfs::VirtualDirectory;

/// What produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    /// The welcome message shown at session start.
    Banner,
    /// A submitted line.
    Command,
    /// A tab-completion candidate listing.
    Completion,
}

/// One entry of the scrollback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub input: String,
    pub output: Vec<String>,
    pub timestamp: DateTime<Local>,
    pub kind: HistoryKind,
}

impl HistoryEntry {
    /// Timestamp as shown next to the entry, e.g. `3:04:05 PM`.
    pub fn time(&self) -> String {
        self.timestamp.format("%-I:%M:%S %p").to_string()
    }
}

/// State of one terminal session. Lives in memory only.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub directory: VirtualDirectory,
    pub history: Vec<HistoryEntry>,
    pub pending_input: String,
}

impl SessionState {
    pub fn push(&mut self, kind: HistoryKind, input: String, output: Vec<String>) {
        self.history.push(HistoryEntry {
            input,
            output,
            timestamp: Local::now(),
            kind,
        });
    }

    /// Number of submitted commands still in the scrollback.
    pub fn command_count(&self) -> usize {
        self.history
            .iter()
            .filter(|entry| entry.kind == HistoryKind::Command)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_session_starts_home_and_empty() {
        let state = SessionState::default();
        assert_eq!(state.directory, VirtualDirectory::Home);
        assert!(state.history.is_empty());
        assert!(state.pending_input.is_empty());
    }

    #[test]
    fn command_count_ignores_banner_and_completions() {
        let mut state = SessionState::default();
        state.push(HistoryKind::Banner, String::new(), vec!["hi".into()]);
        state.push(HistoryKind::Command, "ls".into(), vec![]);
        state.push(HistoryKind::Completion, "tab".into(), vec![]);
        state.push(HistoryKind::Command, "pwd".into(), vec![]);
        assert_eq!(state.command_count(), 2);
        assert_eq!(state.history.len(), 4);
    }

    #[test]
    fn time_renders_twelve_hour_clock() {
        let entry = HistoryEntry {
            input: "date".into(),
            output: vec![],
            timestamp: Local.with_ymd_and_hms(2026, 10, 16, 9, 7, 3).unwrap(),
            kind: HistoryKind::Command,
        };
        assert_eq!(entry.time(), "9:07:03 AM");
    }

    #[test]
    fn entries_serialize_with_kind() {
        let mut state = SessionState::default();
        state.push(HistoryKind::Command, "whoami".into(), vec!["amrhany".into()]);
        let json = serde_json::to_value(&state.history[0]).unwrap();
        assert_eq!(json["kind"], "command");
        assert_eq!(json["input"], "whoami");
        assert_eq!(json["output"][0], "amrhany");
    }
}
