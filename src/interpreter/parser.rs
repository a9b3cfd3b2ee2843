//! Turning a raw input line into an invocation.
//!
//! Matching is case-insensitive and whitespace-insensitive: the line is
//! lowercased, trimmed and its interior whitespace runs collapsed to one
//! space before anything else looks at it.

/// Normalize a raw line for matching.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Blank input.
    Empty,
    /// `clear`
    Clear,
    /// `ls -l`
    ListLong,
    /// `cd` with its first argument, if any.
    ChangeDirectory(Option<String>),
    /// `cat` with its first argument, if any.
    Concatenate(Option<String>),
    /// Anything else, normalized. Resolved against executable aliases and
    /// then the command table.
    Word(String),
}

/// Parse one line.
pub fn parse(raw: &str) -> Invocation {
    let line = normalize(raw);
    match line.as_str() {
        "" => return Invocation::Empty,
        "clear" => return Invocation::Clear,
        "ls -l" => return Invocation::ListLong,
        _ => {}
    }

    let mut words = line.split(' ');
    let head = words.next().unwrap_or_default();
    let first_arg = words.next().map(str::to_string);

    match head {
        "cd" => Invocation::ChangeDirectory(first_arg),
        "cat" => Invocation::Concatenate(first_arg),
        _ => Invocation::Word(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_collapses() {
        assert_eq!(normalize("  LS   -L  "), "ls -l");
        assert_eq!(normalize("\tcd\tProjects\n"), "cd projects");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse(""), Invocation::Empty);
        assert_eq!(parse(" \t "), Invocation::Empty);
    }

    #[test]
    fn clear_is_recognized_alone() {
        assert_eq!(parse("CLEAR"), Invocation::Clear);
        assert_eq!(parse("clear now"), Invocation::Word("clear now".into()));
    }

    #[test]
    fn ls_long_requires_exact_flag() {
        assert_eq!(parse("ls -l"), Invocation::ListLong);
        assert_eq!(parse("ls   -L"), Invocation::ListLong);
        assert_eq!(parse("ls"), Invocation::Word("ls".into()));
        assert_eq!(parse("ls -la"), Invocation::Word("ls -la".into()));
        assert_eq!(parse("ls -l games"), Invocation::Word("ls -l games".into()));
    }

    #[test]
    fn cd_takes_first_argument() {
        assert_eq!(
            parse("cd Projects"),
            Invocation::ChangeDirectory(Some("projects".into()))
        );
        assert_eq!(
            parse("cd a b"),
            Invocation::ChangeDirectory(Some("a".into()))
        );
        assert_eq!(parse("cd"), Invocation::ChangeDirectory(None));
    }

    #[test]
    fn cat_takes_first_argument() {
        assert_eq!(
            parse("cat About.TXT"),
            Invocation::Concatenate(Some("about.txt".into()))
        );
        assert_eq!(parse("cat"), Invocation::Concatenate(None));
    }

    #[test]
    fn other_lines_are_words() {
        assert_eq!(parse("Help"), Invocation::Word("help".into()));
        assert_eq!(parse("./matrix.exe"), Invocation::Word("./matrix.exe".into()));
        assert_eq!(parse("catalog"), Invocation::Word("catalog".into()));
    }
}
