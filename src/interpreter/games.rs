//! "Running" the files of the `games` directory.

use crate::vfs::{EASTER_EGG_SH, GAMES_README, MATRIX_EXE};

use super::commands::{easter_egg, matrix, CommandContext, Handler};

struct Program {
    file: &'static str,
    aliases: [&'static str; 3],
    body: Handler,
}

const PROGRAMS: [Program; 2] = [
    Program {
        file: MATRIX_EXE,
        aliases: ["matrix.exe", "./matrix.exe", "matrix"],
        body: matrix,
    },
    Program {
        file: EASTER_EGG_SH,
        aliases: ["easter-egg.sh", "./easter-egg.sh", "easter-egg"],
        body: easter_egg,
    },
];

/// Names accepted as commands inside `games`, besides the bare command names.
pub const EXECUTABLE_ALIASES: [&str; 4] = [
    "matrix.exe",
    "./matrix.exe",
    "easter-egg.sh",
    "./easter-egg.sh",
];

/// Resolve `line` as a program run from the `games` directory.
///
/// Returns `None` when the line is not one of the directory's aliases, in
/// which case normal command lookup applies.
pub fn run(ctx: &CommandContext<'_>, line: &str) -> Option<Vec<String>> {
    if let Some(program) = PROGRAMS.iter().find(|p| p.aliases.contains(&line)) {
        let mut lines = vec![format!("🎮 Executing {}...", program.file), String::new()];
        lines.extend((program.body)(ctx));
        return Some(lines);
    }

    let readme = line.strip_prefix("./").unwrap_or(line);
    (readme == GAMES_README).then(|| {
        vec![
            format!("bash: {}: Permission denied", line),
            String::new(),
            "💡 This is a text file, not an executable.".to_string(),
            format!("   Use 'cat {}' to read its contents.", GAMES_README),
        ]
    })
}
