//! Directory listings.
//!
//! Listings are computed on demand from the directory and the content store.
//! Nothing here is cached; the content never changes, so a listing for a
//! given directory is always the same.

use std::sync::LazyLock;

use regex::Regex;

use crate::content::{ContentStore, SkillCategory};
use crate::vfs::VirtualDirectory;

/// What kind of entry a listing row is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Executable,
}

impl EntryKind {
    /// Permission column of `ls -l`.
    pub fn permissions(&self) -> &'static str {
        match self {
            Self::Directory => "drwxr-xr-x",
            Self::Executable => "-rwxr-xr-x",
            Self::File => "-rw-r--r--",
        }
    }

    /// Synthetic size column of `ls -l`.
    pub fn size(&self) -> u32 {
        match self {
            Self::Directory => 4096,
            Self::Executable => 8192,
            Self::File => 1024,
        }
    }

    fn default_icon(&self) -> &'static str {
        match self {
            Self::Directory => "📁",
            Self::File => "📄",
            Self::Executable => "🎮",
        }
    }
}

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Bare name, without icon or trailing slash.
    pub name: String,
    pub kind: EntryKind,
    pub icon: &'static str,
}

impl Entry {
    pub fn directory(name: &str) -> Self {
        Self::new(name, EntryKind::Directory)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::File)
    }

    pub fn executable(name: &str) -> Self {
        Self::new(name, EntryKind::Executable)
    }

    fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            icon: kind.default_icon(),
        }
    }

    /// Override the icon shown by `ls`.
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Name as listed: directories get a trailing `/`.
    pub fn display_name(&self) -> String {
        if self.is_directory() {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Icon-tagged form used by `ls`, e.g. `📁 projects/`.
    pub fn tagged(&self) -> String {
        format!("{} {}", self.icon, self.display_name())
    }
}

/// Executable and text entries of the `games` directory.
pub const MATRIX_EXE: &str = "matrix.exe";
pub const EASTER_EGG_SH: &str = "easter-egg.sh";
pub const GAMES_README: &str = "readme.txt";

/// Home directory files.
pub const ABOUT_TXT: &str = "about.txt";
pub const CONTACT_TXT: &str = "contact.txt";
pub const RESUME_PDF: &str = "resume.pdf";

/// List the entries of a directory.
pub fn listing(directory: VirtualDirectory, content: &ContentStore) -> Vec<Entry> {
    match directory {
        VirtualDirectory::Home => vec![
            Entry::directory("projects"),
            Entry::directory("experience"),
            Entry::directory("skills"),
            Entry::file(ABOUT_TXT),
            Entry::file(CONTACT_TXT),
            Entry::file(RESUME_PDF),
            Entry::directory("games").with_icon("🎮"),
        ],
        VirtualDirectory::Projects => content
            .projects
            .iter()
            .enumerate()
            .map(|(index, project)| Entry::file(project_file_name(index, &project.name)))
            .collect(),
        VirtualDirectory::Experience => content
            .experience
            .iter()
            .enumerate()
            .map(|(index, exp)| Entry::file(experience_file_name(index, &exp.company)))
            .collect(),
        VirtualDirectory::Skills => SkillCategory::ALL
            .into_iter()
            .map(|category| Entry::file(category.file_name()))
            .collect(),
        VirtualDirectory::Games => vec![
            Entry::executable(MATRIX_EXE),
            Entry::executable(EASTER_EGG_SH),
            Entry::file(GAMES_README),
        ],
    }
}

/// Runs of whitespace collapsed by [`slugify`].
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE must compile"));

/// Lowercase a name and turn every whitespace run into a single `-`.
///
/// Punctuation is kept as is: `Earth vs. Alien's War` becomes
/// `earth-vs.-alien's-war`.
pub fn slugify(name: &str) -> String {
    WHITESPACE.replace_all(&name.to_lowercase(), "-").into_owned()
}

/// File name of the project at `index` (0-based): `1-falcony-search-engine.md`.
pub fn project_file_name(index: usize, name: &str) -> String {
    format!("{}-{}.md", index + 1, slugify(name))
}

/// File name of the experience record at `index` (0-based): `1-rawmart.txt`.
pub fn experience_file_name(index: usize, company: &str) -> String {
    format!("{}-{}.txt", index + 1, slugify(company))
}

/// Parse the 1-based index encoded at the front of a generated file name.
///
/// The index is the run of leading digits before the first `-`, so
/// `2-anything.md`, `2.md` and `2x-foo` all yield 2. Returns the 0-based
/// position, or `None` for names without a leading number or with index 0.
pub fn file_index(file_name: &str) -> Option<usize> {
    let head = file_name.split('-').next().unwrap_or_default();
    let digits: String = head.chars().take_while(|c| c.is_ascii_digit()).collect();
    let number: usize = digits.parse().ok()?;
    number.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;

    fn names(entries: &[Entry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn slugify_replaces_whitespace_runs() {
        assert_eq!(slugify("Falcony Search Engine"), "falcony-search-engine");
        assert_eq!(slugify("Sayeh-Fi-Misr"), "sayeh-fi-misr");
        assert_eq!(slugify("a  \t b"), "a-b");
    }

    #[test]
    fn slugify_keeps_punctuation() {
        assert_eq!(
            slugify("Earth vs. Alien's War Simulation"),
            "earth-vs.-alien's-war-simulation"
        );
        assert_eq!(
            slugify("Cairo University Racing Team (CURT)"),
            "cairo-university-racing-team-(curt)"
        );
    }

    #[test]
    fn generated_file_names() {
        assert_eq!(
            project_file_name(0, "Falcony Search Engine"),
            "1-falcony-search-engine.md"
        );
        assert_eq!(experience_file_name(3, "Rawmart"), "4-rawmart.txt");
    }

    #[test]
    fn file_index_parses_leading_number() {
        assert_eq!(file_index("1-falcony-search-engine.md"), Some(0));
        assert_eq!(file_index("4-anything"), Some(3));
        assert_eq!(file_index("2.md"), Some(1));
        assert_eq!(file_index("12x-foo"), Some(11));
    }

    #[test]
    fn file_index_rejects_non_numbers() {
        assert_eq!(file_index("readme.txt"), None);
        assert_eq!(file_index("-1-foo"), None);
        assert_eq!(file_index("0-zero.md"), None);
        assert_eq!(file_index(""), None);
    }

    #[test]
    fn home_listing() {
        let content = builtin::load().unwrap();
        let entries = listing(VirtualDirectory::Home, &content);
        let tagged: Vec<String> = entries.iter().map(Entry::tagged).collect();
        assert_eq!(
            tagged,
            vec![
                "📁 projects/",
                "📁 experience/",
                "📁 skills/",
                "📄 about.txt",
                "📄 contact.txt",
                "📄 resume.pdf",
                "🎮 games/",
            ]
        );
    }

    #[test]
    fn games_directory_is_a_directory_despite_icon() {
        let content = builtin::load().unwrap();
        let games = listing(VirtualDirectory::Home, &content)
            .into_iter()
            .find(|e| e.name == "games")
            .unwrap();
        assert_eq!(games.kind, EntryKind::Directory);
        assert_eq!(games.icon, "🎮");
    }

    #[test]
    fn projects_listing_is_generated() {
        let content = builtin::load().unwrap();
        let entries = listing(VirtualDirectory::Projects, &content);
        assert_eq!(
            names(&entries),
            vec![
                "1-falcony-search-engine.md",
                "2-sayeh-fi-misr.md",
                "3-global-goal-galaxy.md",
                "4-earth-vs.-alien's-war-simulation.md",
            ]
        );
        assert!(entries.iter().all(|e| e.kind == EntryKind::File));
    }

    #[test]
    fn experience_listing_is_generated() {
        let content = builtin::load().unwrap();
        let entries = listing(VirtualDirectory::Experience, &content);
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].name, "1-rawmart.txt");
        assert_eq!(entries[3].name, "4-summit-technology-solutions.txt");
    }

    #[test]
    fn skills_listing() {
        let content = builtin::load().unwrap();
        assert_eq!(
            names(&listing(VirtualDirectory::Skills, &content)),
            vec![
                "languages.txt",
                "frontend.txt",
                "backend.txt",
                "databases.txt",
                "concepts.txt",
            ]
        );
    }

    #[test]
    fn games_listing() {
        let content = builtin::load().unwrap();
        let entries = listing(VirtualDirectory::Games, &content);
        assert_eq!(
            names(&entries),
            vec!["matrix.exe", "easter-egg.sh", "readme.txt"]
        );
        assert_eq!(entries[0].kind, EntryKind::Executable);
        assert_eq!(entries[2].kind, EntryKind::File);
    }

    #[test]
    fn entry_kind_columns() {
        assert_eq!(EntryKind::Directory.permissions(), "drwxr-xr-x");
        assert_eq!(EntryKind::Directory.size(), 4096);
        assert_eq!(EntryKind::Executable.permissions(), "-rwxr-xr-x");
        assert_eq!(EntryKind::Executable.size(), 8192);
        assert_eq!(EntryKind::File.permissions(), "-rw-r--r--");
        assert_eq!(EntryKind::File.size(), 1024);
    }
}
