//! Content schema definitions.
//!
//! These structs map one-to-one onto the portfolio content file. The store is
//! deserialized once at startup and only ever read afterwards.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The complete portfolio: everything the terminal can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContentStore {
    /// Headline information.
    pub hero: Hero,

    /// Biography.
    pub about: About,

    /// Work experience, most recent first.
    #[serde(default)]
    pub experience: Vec<Experience>,

    /// Projects, in display order.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Skills grouped into fixed categories.
    pub skills: Skills,

    /// Contact details.
    pub contact: Contact,
}

/// Headline information shown at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub location: String,
    pub tagline: String,
    /// Where `resume` points the browser.
    pub resume_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct About {
    pub bio: String,
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    /// Bullet points, in order.
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub description: String,
    pub link: String,
}

/// The five skill categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub databases: Vec<String>,
    pub concepts: Vec<String>,
}

impl Skills {
    /// Entries for one category.
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Concepts => &self.concepts,
        }
    }
}

/// A skill category. Each one is also a file in the `skills` directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Databases,
    Concepts,
}

impl SkillCategory {
    /// All categories in display order.
    pub const ALL: [SkillCategory; 5] = [
        Self::Languages,
        Self::Frontend,
        Self::Backend,
        Self::Databases,
        Self::Concepts,
    ];

    /// Name of the category's file in the `skills` directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Languages => "languages.txt",
            Self::Frontend => "frontend.txt",
            Self::Backend => "backend.txt",
            Self::Databases => "databases.txt",
            Self::Concepts => "concepts.txt",
        }
    }

    /// Look a category up by its file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.file_name() == name)
    }

    /// First line of the category's file.
    pub fn file_title(&self) -> &'static str {
        match self {
            Self::Languages => "Programming Languages:",
            Self::Frontend => "Frontend Technologies:",
            Self::Backend => "Backend Technologies:",
            Self::Databases => "Databases:",
            Self::Concepts => "Concepts & Tools:",
        }
    }

    /// Heading used by the `skills` overview.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Languages => "💻 Languages:",
            Self::Frontend => "🎨 Frontend:",
            Self::Backend => "⚙️ Backend:",
            Self::Databases => "🗄️ Databases:",
            Self::Concepts => "🧠 Concepts:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}
