//! `cat`: reading virtual files.

use crate::content::{ContentStore, Experience, Project, SkillCategory};
use crate::vfs::{
    file_index, VirtualDirectory, ABOUT_TXT, CONTACT_TXT, EASTER_EGG_SH, GAMES_README,
    MATRIX_EXE,
};

use super::commands::{about_block, contact_block, to_lines, CommandContext};

const GAMES_README_BODY: &[&str] = &[
    "🎮 Games Directory",
    "",
    "Welcome to the games folder! Here you can find:",
    "",
    "🎯 matrix.exe - Run the Matrix simulation",
    "🥚 easter-egg.sh - Hidden surprises and fun",
    "",
    "💡 Try running these files with their full names!",
];

/// Print a file of the current directory.
pub fn concatenate(ctx: &CommandContext<'_>, target: Option<&str>) -> Vec<String> {
    let Some(name) = target else {
        return to_lines(&[
            "cat: missing file operand",
            "",
            "💡 Use 'ls' to see available files in current directory",
        ]);
    };

    read(ctx.directory, ctx.content, name).unwrap_or_else(|| {
        vec![
            format!("cat: {}: No such file or directory", name),
            String::new(),
            "💡 Use 'ls' to see available files in current directory".to_string(),
        ]
    })
}

/// Contents of `name` in `directory`, if such a file exists.
pub fn read(directory: VirtualDirectory, content: &ContentStore, name: &str) -> Option<Vec<String>> {
    match directory {
        VirtualDirectory::Home => match name {
            ABOUT_TXT => Some(about_block(content)),
            CONTACT_TXT => Some(contact_block(content)),
            _ => None,
        },
        VirtualDirectory::Skills => {
            SkillCategory::from_file_name(name).map(|category| skill_file(content, category))
        }
        VirtualDirectory::Experience => file_index(name)
            .and_then(|index| content.experience.get(index))
            .map(experience_file),
        VirtualDirectory::Projects => file_index(name)
            .and_then(|index| content.projects.get(index))
            .map(project_file),
        VirtualDirectory::Games => match name {
            GAMES_README => Some(to_lines(GAMES_README_BODY)),
            MATRIX_EXE => Some(executable_file(name, "matrix")),
            EASTER_EGG_SH => Some(executable_file(name, "easter-egg")),
            _ => None,
        },
    }
}

fn skill_file(content: &ContentStore, category: SkillCategory) -> Vec<String> {
    let mut lines = vec![category.file_title().to_string(), String::new()];
    lines.extend(content.skills.get(category).iter().map(|s| format!("• {}", s)));
    lines
}

fn experience_file(exp: &Experience) -> Vec<String> {
    let mut lines = vec![
        format!("=== {} ===", exp.company),
        String::new(),
        format!("🏢 Role: {}", exp.role),
        format!("📅 Period: {}", exp.period),
        format!("📍 Location: {}", exp.location),
        String::new(),
        "📋 Responsibilities:".to_string(),
    ];
    lines.extend(exp.description.iter().map(|d| format!("• {}", d)));
    if let Some(link) = &exp.link {
        lines.push(String::new());
        lines.push(format!("🔗 Link: {}", link));
    }
    lines.retain(|line| !line.is_empty());
    lines
}

fn project_file(project: &Project) -> Vec<String> {
    vec![
        format!("# {}", project.name),
        String::new(),
        format!("**Tech Stack:** {}", project.tech.join(", ")),
        String::new(),
        "**Description:**".to_string(),
        project.description.clone(),
        String::new(),
        format!("**Repository:** {}", project.link),
        String::new(),
        "---".to_string(),
        "💡 This is a markdown file showing project details".to_string(),
    ]
}

fn executable_file(name: &str, command: &str) -> Vec<String> {
    vec![
        format!("📄 {}", name),
        String::new(),
        "This is an executable file. To run it, use the command name directly:".to_string(),
        format!("Try: {}", command),
        String::new(),
        "💡 Binary files cannot be displayed as text.".to_string(),
    ]
}
