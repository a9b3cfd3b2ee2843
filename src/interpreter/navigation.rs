//! `ls -l` and `cd`.

use crate::vfs::{listing, EntryKind, VirtualDirectory};

use super::commands::{to_lines, CommandContext};
use super::reply::{Interpretation, Reply};

/// Fixed timestamp column of `ls -l`.
const MODIFIED: &str = "Aug 24 10:30";

/// Arguments of `cd` that lead back home.
const HOME_ALIASES: [&str; 3] = ["~", "/", ".."];

const GAMES_HINT: &[&str] = &[
    "",
    "💡 Executable files can be run with:",
    "   matrix.exe, ./matrix.exe, or just matrix",
    "   easter-egg.sh, ./easter-egg.sh, or just easter-egg",
];

/// Long listing of the current directory.
pub fn list_long(ctx: &CommandContext<'_>) -> Vec<String> {
    let entries = listing(ctx.directory, ctx.content);
    let mut lines = vec![
        format!("Directory: {}", ctx.directory.absolute_path(ctx.user)),
        String::new(),
        format!("total {}", entries.len()),
        String::new(),
    ];
    lines.extend(entries.iter().map(|entry| {
        format!(
            "{}  1 {user} {user}  {:>6} {} {}",
            entry.kind.permissions(),
            entry.kind.size(),
            MODIFIED,
            entry.display_name(),
            user = ctx.user,
        )
    }));
    if ctx.directory == VirtualDirectory::Games {
        lines.extend(to_lines(GAMES_HINT));
    }
    lines
}

/// Change directory.
pub fn change_directory(ctx: &CommandContext<'_>, target: Option<&str>) -> Interpretation {
    let Some(target) = target else {
        return Interpretation::lines(to_lines(&[
            "cd: missing directory operand",
            "",
            "💡 Usage: cd <directory>",
            "   Use 'cd ~' or 'cd ..' to go back home",
        ]));
    };

    if HOME_ALIASES.contains(&target) {
        return moved_to(VirtualDirectory::Home, "Changed directory to home".to_string());
    }

    let name = target.strip_suffix('/').unwrap_or(target);
    if let Some(directory) = VirtualDirectory::child(name) {
        return moved_to(directory, format!("Changed directory to {}", directory));
    }

    // Any file or executable whose name contains the target counts.
    let is_file = listing(ctx.directory, ctx.content)
        .iter()
        .any(|entry| entry.kind != EntryKind::Directory && entry.name.contains(target));
    let lines = if is_file {
        vec![
            format!("cd: {}: Not a directory (it's a file)", target),
            String::new(),
            format!("💡 Use 'cat {}' to read the file contents", target),
            "   Use 'cd ~' or 'cd ..' to go back home".to_string(),
        ]
    } else {
        vec![
            format!("cd: {}: No such file or directory", target),
            String::new(),
            "💡 Available directories: projects, experience, skills, games".to_string(),
            "   Use 'cd ~' or 'cd ..' to go back home".to_string(),
        ]
    };
    Interpretation::lines(lines)
}

fn moved_to(directory: VirtualDirectory, message: String) -> Interpretation {
    Interpretation {
        reply: Reply::lines(vec![message]),
        directory: Some(directory),
    }
}
