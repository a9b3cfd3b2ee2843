//! The command table.
//!
//! Every plain command is an entry mapping its name to a handler. Handlers
//! are pure functions of a [`CommandContext`] and only run when their command
//! is invoked, so `ls` is the only thing that ever builds a listing.

use chrono::{DateTime, Local};

use crate::content::{ContentStore, SkillCategory};
use crate::vfs::{listing, Entry, VirtualDirectory};

use super::reply::{Effect, Reply};

/// Everything a handler may read.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub content: &'a ContentStore,
    pub directory: VirtualDirectory,
    /// User name shown by `pwd`, `whoami` and `ls -l`.
    pub user: &'a str,
    /// Wall-clock time for `date`.
    pub now: DateTime<Local>,
}

/// Produces a command's output lines.
pub type Handler = fn(&CommandContext<'_>) -> Vec<String>;

/// What running a command does.
#[derive(Clone, Copy)]
pub enum CommandBody {
    /// Append the handler's lines to the scrollback.
    Lines(Handler),
    /// Wipe the scrollback.
    Clear,
}

/// One entry of the command table.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub body: CommandBody,
    /// Link the host should open after running the command.
    pub opens: Option<fn(&ContentStore) -> &str>,
}

impl CommandSpec {
    const fn lines(name: &'static str, handler: Handler) -> Self {
        Self {
            name,
            body: CommandBody::Lines(handler),
            opens: None,
        }
    }

    /// Run the command.
    pub fn run(&self, ctx: &CommandContext<'_>) -> Reply {
        match self.body {
            CommandBody::Clear => Reply::Clear,
            CommandBody::Lines(handler) => {
                let effects = self
                    .opens
                    .map(|link| vec![Effect::OpenLink(link(ctx.content).to_string())])
                    .unwrap_or_default();
                Reply::Output {
                    lines: handler(ctx),
                    effects,
                }
            }
        }
    }
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("opens", &self.opens.is_some())
            .finish()
    }
}

/// The table, in the order suggestions are drawn from.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec::lines("help", help),
    CommandSpec::lines("ls", ls),
    CommandSpec::lines("pwd", pwd),
    CommandSpec::lines("whoami", whoami),
    CommandSpec::lines("about", about),
    CommandSpec::lines("skills", skills),
    CommandSpec::lines("projects", projects),
    CommandSpec::lines("experience", experience),
    CommandSpec::lines("contact", contact),
    CommandSpec {
        name: "resume",
        body: CommandBody::Lines(resume),
        opens: Some(resume_link),
    },
    CommandSpec::lines("date", date),
    CommandSpec {
        name: "clear",
        body: CommandBody::Clear,
        opens: None,
    },
    CommandSpec::lines("easter-egg", easter_egg),
    CommandSpec::lines("matrix", matrix),
];

/// Find a command by its exact (normalized) name.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Names of all table commands, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|spec| spec.name)
}

pub(crate) fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

const HELP: &[&str] = &[
    "Available commands:",
    "",
    "📁 Navigation:",
    "  ls              - List contents",
    "  ls -l           - List with details",
    "  cd <directory>  - Change directory",
    "  cat <file>      - Read file contents",
    "  pwd             - Show current directory",
    "",
    "📄 Portfolio:",
    "  about           - About me",
    "  skills          - My technical skills",
    "  projects        - View my projects",
    "  experience      - Work experience",
    "  contact         - Contact information",
    "  resume          - Download resume",
    "",
    "🎮 Fun:",
    "  clear           - Clear terminal",
    "  whoami          - Who am I?",
    "  date            - Current date",
    "  easter-egg      - Find hidden surprises",
    "  matrix          - Matrix effect",
    "",
    "🎯 Games (in games/ directory):",
    "  matrix.exe      - Run Matrix simulation",
    "  easter-egg.sh   - Execute easter egg script",
    "  ./filename      - Run executable in current directory",
    "",
    "💡 Tip: Use Tab for autocomplete!",
];

fn help(_ctx: &CommandContext<'_>) -> Vec<String> {
    to_lines(HELP)
}

fn ls(ctx: &CommandContext<'_>) -> Vec<String> {
    listing(ctx.directory, ctx.content)
        .iter()
        .map(Entry::tagged)
        .collect()
}

fn pwd(ctx: &CommandContext<'_>) -> Vec<String> {
    vec![ctx.directory.absolute_path(ctx.user)]
}

fn whoami(ctx: &CommandContext<'_>) -> Vec<String> {
    let hero = &ctx.content.hero;
    vec![
        ctx.user.to_string(),
        String::new(),
        format!("Full Name: {}", hero.name),
        format!("Role: {}", hero.title),
        format!("Location: {}", hero.location),
        "Status: Building amazing things! ✨".to_string(),
    ]
}

/// Biography block shared by `about` and `cat about.txt`.
pub(crate) fn about_block(content: &ContentStore) -> Vec<String> {
    vec![
        format!("=== About {} ===", content.hero.name),
        String::new(),
        content.about.bio.clone(),
        String::new(),
        format!("📍 Location: {}", content.hero.location),
        format!("💼 Title: {}", content.hero.title),
    ]
}

fn about(ctx: &CommandContext<'_>) -> Vec<String> {
    let mut lines = about_block(ctx.content);
    lines.push(String::new());
    lines.push(format!("🎯 {}", ctx.content.hero.tagline));
    lines
}

fn skills(ctx: &CommandContext<'_>) -> Vec<String> {
    let mut lines = vec!["=== Technical Skills ===".to_string()];
    for category in SkillCategory::ALL {
        lines.push(String::new());
        lines.push(category.heading().to_string());
        lines.push(format!("   {}", ctx.content.skills.get(category).join(", ")));
    }
    lines
}

fn projects(ctx: &CommandContext<'_>) -> Vec<String> {
    let mut lines = vec!["=== Projects ===".to_string(), String::new()];
    for (index, project) in ctx.content.projects.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, project.name));
        lines.push(format!("   Tech: {}", project.tech.join(", ")));
        lines.push(format!("   Description: {}", project.description));
        lines.push(format!("   Link: {}", project.link));
        lines.push(String::new());
    }
    lines.push("💡 Use 'cd projects' to explore individual projects!".to_string());
    lines
}

fn experience(ctx: &CommandContext<'_>) -> Vec<String> {
    let mut lines = vec!["=== Work Experience ===".to_string(), String::new()];
    for (index, exp) in ctx.content.experience.iter().enumerate() {
        lines.push(format!("{}. {} - {}", index + 1, exp.company, exp.role));
        lines.push(format!("   Period: {}", exp.period));
        lines.push(format!("   Location: {}", exp.location));
        lines.extend(exp.description.iter().map(|d| format!("   • {}", d)));
        lines.push(
            exp.link
                .as_ref()
                .map(|link| format!("   🔗 {}", link))
                .unwrap_or_default(),
        );
        lines.push(String::new());
    }
    lines
}

/// Contact block shared by `contact` and `cat contact.txt`.
pub(crate) fn contact_block(content: &ContentStore) -> Vec<String> {
    let contact = &content.contact;
    vec![
        "=== Contact Information ===".to_string(),
        String::new(),
        format!("📧 Email: {}", contact.email),
        format!("📱 Phone: {}", contact.phone),
        format!("💼 LinkedIn: {}", contact.linkedin),
        format!("🐙 GitHub: {}", contact.github),
    ]
}

fn contact(ctx: &CommandContext<'_>) -> Vec<String> {
    let mut lines = contact_block(ctx.content);
    lines.push(String::new());
    lines.push("💬 Feel free to reach out for opportunities or collaborations!".to_string());
    lines
}

fn resume_link(content: &ContentStore) -> &str {
    &content.hero.resume_link
}

fn resume(ctx: &CommandContext<'_>) -> Vec<String> {
    vec![
        "📄 Resume Download".to_string(),
        String::new(),
        "Opening resume in new tab...".to_string(),
        format!("🔗 {}", ctx.content.hero.resume_link),
        String::new(),
        "💡 Type 'contact' to get in touch directly!".to_string(),
    ]
}

fn date(ctx: &CommandContext<'_>) -> Vec<String> {
    vec![ctx.now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()]
}

const EASTER_EGG: &[&str] = &[
    "🥚 Easter Egg Found! 🎉",
    "",
    "⠀⠀⠀⠀⠀⣠⣶⡾⠏⠉⠙⠉⠙⠛⠛⠛⠛⠛⠛⠛⠛⠉⠉⠉⠙⠲⢤⡀⠀",
    "⠀⠀⠀⣤⠞⠉⠀⠀⠀⠀⣴⣶⣄⠀⠀⠀⢀⣕⠦⣀⠀⠀⠀⠀⠀⠀⠀⢀⣤⠞⠉",
    "⠀⣠⠞⠁⠀⠀⠀⠀⠀⠀⠉⠛⠋⠀⠀⠀⠈⠉⠀⠀⠈⢳⡄⠀⠀⢀⣠⠞⠉⠀⠀",
    "⣰⠋⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠹⣆⡴⠋⠀⠀⠀⠀⠀",
    "",
    "Fun fact: This terminal was built with Rust, serde,",
    "and lots of ☕ coffee! Thanks for exploring! 🚀",
    "",
    "🎮 Try typing 'matrix' for another surprise...",
];

pub(crate) fn easter_egg(_ctx: &CommandContext<'_>) -> Vec<String> {
    to_lines(EASTER_EGG)
}

const MATRIX: &[&str] = &[
    "⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿",
    "⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿",
    "⠀⠀⠀⠀⠀⠀Wake up, Neo... 💊",
    "⠀⠀⠀⠀⠀⠀The Matrix has you...",
    "⠀⠀⠀⠀⠀⠀Follow the white rabbit... 🐰",
    "",
    "01001000 01100101 01101100 01101100 01101111",
    "",
    "Decrypted: 'Hello' - You found the Matrix! 🔴🔵",
    "",
    "🎯 Achievement Unlocked: Neo Developer",
];

pub(crate) fn matrix(_ctx: &CommandContext<'_>) -> Vec<String> {
    to_lines(MATRIX)
}
