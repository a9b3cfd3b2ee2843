//! The reply for unknown commands.

use super::commands::{names, CommandContext};

const MAX_SUGGESTIONS: usize = 3;

/// Commands offered when nothing resembles the typed line.
const POPULAR: &str = "help, about, projects, skills";

/// Up to three table commands that loosely resemble `typed`.
///
/// A command qualifies when it contains the first three characters of the
/// typed line, or the typed line contains the command's first three
/// characters.
pub fn suggestions(typed: &str) -> Vec<&'static str> {
    let typed_head = head(typed);
    names()
        .filter(|name| name.contains(typed_head) || typed.contains(head(name)))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// First three characters, or the whole string if shorter.
fn head(s: &str) -> &str {
    s.char_indices().nth(3).map_or(s, |(end, _)| &s[..end])
}

/// Output for a line that matched nothing.
///
/// `raw` is echoed back as typed (trimmed); `normalized` drives suggestions.
pub fn not_found(ctx: &CommandContext<'_>, raw: &str, normalized: &str) -> Vec<String> {
    let found = suggestions(normalized);
    let hint = if found.is_empty() {
        format!("🎯 Popular commands: {}", POPULAR)
    } else {
        format!("🎯 Did you mean: {}?", found.join(", "))
    };
    vec![
        format!("Command '{}' not found. 🤔", raw.trim()),
        String::new(),
        "💡 Try 'help' to see available commands!".to_string(),
        hint,
        String::new(),
        format!("📍 Current directory: {}", ctx.directory),
    ]
}
