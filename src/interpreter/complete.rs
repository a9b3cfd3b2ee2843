//! Tab completion of the pending input buffer.

use serde::Serialize;

use crate::content::ContentStore;
use crate::vfs::{listing, EntryKind, VirtualDirectory};

use super::games::EXECUTABLE_ALIASES;

/// Candidates for the first word.
const FIRST_WORDS: &[&str] = &[
    "help",
    "ls",
    "ls -l",
    "cd",
    "cat",
    "pwd",
    "whoami",
    "about",
    "skills",
    "projects",
    "experience",
    "contact",
    "resume",
    "date",
    "clear",
    "easter-egg",
    "matrix",
];

/// Candidates for the argument of `cd`.
const CD_TARGETS: &[&str] = &["~", "..", "projects", "experience", "skills", "games"];

/// Completions that end a word without a trailing space.
const FILE_SUFFIXES: [&str; 3] = [".txt", ".pdf", ".md"];

/// Outcome of completing a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CompletionResult {
    /// Nothing matched; the buffer is unchanged.
    NoMatch,
    /// A single candidate; the new buffer.
    Completed { buffer: String },
    /// Several candidates. `buffer` is extended to their common prefix
    /// when that is longer than what was typed.
    Ambiguous {
        buffer: String,
        candidates: Vec<String>,
    },
}

/// Complete `buffer` as typed in `directory`.
pub fn complete(buffer: &str, directory: VirtualDirectory, content: &ContentStore) -> CompletionResult {
    let mut words: Vec<&str> = buffer.split_whitespace().collect();
    if words.is_empty() || buffer.ends_with(char::is_whitespace) {
        words.push("");
    }
    let position = words.len() - 1;
    let partial = words[position];

    let candidates: Vec<String> = candidates_for(&words, directory, content)
        .into_iter()
        .filter(|candidate| {
            candidate
                .to_lowercase()
                .starts_with(&partial.to_lowercase())
        })
        .collect();

    match candidates.as_slice() {
        [] => CompletionResult::NoMatch,
        [only] => {
            let mut replacement = only.clone();
            if !FILE_SUFFIXES.iter().any(|suffix| only.ends_with(suffix)) {
                replacement.push(' ');
            }
            CompletionResult::Completed {
                buffer: replace_last(&words, &replacement),
            }
        }
        _ => {
            let common = common_prefix(&candidates);
            let buffer = if common.chars().count() > partial.chars().count() {
                replace_last(&words, &common)
            } else {
                buffer.to_string()
            };
            CompletionResult::Ambiguous { buffer, candidates }
        }
    }
}

fn candidates_for(words: &[&str], directory: VirtualDirectory, content: &ContentStore) -> Vec<String> {
    match words {
        [_] => {
            let mut names: Vec<String> = FIRST_WORDS.iter().map(|s| s.to_string()).collect();
            if directory == VirtualDirectory::Games {
                names.extend(EXECUTABLE_ALIASES.iter().map(|s| s.to_string()));
            }
            names
        }
        [command, _] if command.eq_ignore_ascii_case("cd") => {
            CD_TARGETS.iter().map(|s| s.to_string()).collect()
        }
        [command, _] if command.eq_ignore_ascii_case("cat") => listing(directory, content)
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::File)
            .map(|entry| entry.name)
            .collect(),
        _ => Vec::new(),
    }
}

fn replace_last(words: &[&str], replacement: &str) -> String {
    let mut parts: Vec<&str> = words[..words.len() - 1].to_vec();
    parts.push(replacement);
    parts.join(" ")
}

/// Longest prefix shared by every item, compared character by character.
pub fn common_prefix(items: &[String]) -> String {
    let Some((first, rest)) = items.split_first() else {
        return String::new();
    };
    let mut len = first.chars().count();
    for item in rest {
        len = len.min(
            first
                .chars()
                .zip(item.chars())
                .take_while(|(a, b)| a == b)
                .count(),
        );
    }
    first.chars().take(len).collect()
}
