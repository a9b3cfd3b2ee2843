//! The fixed set of virtual directories.

use std::fmt;
use std::str::FromStr;

/// A pseudo-directory the terminal can navigate into.
///
/// The tree is one level deep: `home` holds the four others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VirtualDirectory {
    #[default]
    Home,
    Projects,
    Experience,
    Skills,
    Games,
}

impl VirtualDirectory {
    /// Every directory, `home` first.
    pub const ALL: [VirtualDirectory; 5] = [
        Self::Home,
        Self::Projects,
        Self::Experience,
        Self::Skills,
        Self::Games,
    ];

    /// The four directories reachable by name from `cd`.
    pub const CHILDREN: [VirtualDirectory; 4] =
        [Self::Projects, Self::Experience, Self::Skills, Self::Games];

    /// Display name of the directory.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Games => "games",
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }

    /// Find a child directory by its name. `home` is not a child.
    pub fn child(name: &str) -> Option<Self> {
        Self::CHILDREN.into_iter().find(|d| d.name() == name)
    }

    /// Synthetic absolute path, e.g. `/home/amrhany/projects`.
    pub fn absolute_path(&self, user: &str) -> String {
        if self.is_home() {
            format!("/home/{}", user)
        } else {
            format!("/home/{}/{}", user, self.name())
        }
    }

    /// Short form used by prompts: `~` or `~/games`.
    pub fn prompt_path(&self) -> String {
        if self.is_home() {
            "~".to_string()
        } else {
            format!("~/{}", self.name())
        }
    }
}

impl fmt::Display for VirtualDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VirtualDirectory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" | "~" => Ok(Self::Home),
            other => Self::child(other).ok_or_else(|| format!("unknown directory: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_home() {
        assert_eq!(VirtualDirectory::default(), VirtualDirectory::Home);
    }

    #[test]
    fn child_lookup() {
        assert_eq!(
            VirtualDirectory::child("games"),
            Some(VirtualDirectory::Games)
        );
        assert_eq!(VirtualDirectory::child("home"), None);
        assert_eq!(VirtualDirectory::child("music"), None);
    }

    #[test]
    fn absolute_path_omits_home_segment() {
        assert_eq!(
            VirtualDirectory::Home.absolute_path("amrhany"),
            "/home/amrhany"
        );
        assert_eq!(
            VirtualDirectory::Skills.absolute_path("amrhany"),
            "/home/amrhany/skills"
        );
    }

    #[test]
    fn prompt_path() {
        assert_eq!(VirtualDirectory::Home.prompt_path(), "~");
        assert_eq!(VirtualDirectory::Projects.prompt_path(), "~/projects");
    }

    #[test]
    fn from_str_accepts_home_and_children() {
        assert_eq!("home".parse(), Ok(VirtualDirectory::Home));
        assert_eq!("~".parse(), Ok(VirtualDirectory::Home));
        assert_eq!("Experience".parse(), Ok(VirtualDirectory::Experience));
        assert!("nowhere".parse::<VirtualDirectory>().is_err());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(VirtualDirectory::Games.to_string(), "games");
    }
}
