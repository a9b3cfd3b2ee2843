//! Content validation rules.
//!
//! The interpreter assumes a few things about the content it serves:
//! - the hero has a name and a resume link
//! - every project and company has a name, since file names derive from them
//! - generated file names contain no path separator
//! - no skill category is empty

use crate::content::schema::{ContentStore, SkillCategory};
use crate::error::{FolioError, Result};
use crate::vfs::{experience_file_name, project_file_name};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate content and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_content(content: &ContentStore) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_hero(content));
    errors.extend(validate_projects(content));
    errors.extend(validate_experience(content));
    errors.extend(validate_skills(content));

    errors
}

/// Validate content, failing on the first batch of errors.
pub fn validate(content: &ContentStore) -> Result<()> {
    let errors = validate_content(content);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(FolioError::ContentValidationError { message })
}

fn validate_hero(content: &ContentStore) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if content.hero.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-name",
            "hero.name must not be empty",
        ));
    }
    if content.hero.resume_link.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-resume-link",
            "hero.resume_link must not be empty",
        ));
    }

    errors
}

fn validate_projects(content: &ContentStore) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, project) in content.projects.iter().enumerate() {
        if project.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-project-name",
                format!("projects[{}].name must not be empty", index),
            ));
            continue;
        }
        let file = project_file_name(index, &project.name);
        if file.contains('/') {
            errors.push(ValidationError::new(
                "path-separator",
                format!("projects[{}] produces file name '{}' containing '/'", index, file),
            ));
        }
    }

    errors
}

fn validate_experience(content: &ContentStore) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, exp) in content.experience.iter().enumerate() {
        if exp.company.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-company",
                format!("experience[{}].company must not be empty", index),
            ));
            continue;
        }
        let file = experience_file_name(index, &exp.company);
        if file.contains('/') {
            errors.push(ValidationError::new(
                "path-separator",
                format!(
                    "experience[{}] produces file name '{}' containing '/'",
                    index, file
                ),
            ));
        }
    }

    errors
}

fn validate_skills(content: &ContentStore) -> Vec<ValidationError> {
    SkillCategory::ALL
        .into_iter()
        .filter(|category| content.skills.get(*category).is_empty())
        .map(|category| {
            ValidationError::new(
                "empty-skill-category",
                format!(
                    "skills category '{}' must list at least one skill",
                    category.file_name().trim_end_matches(".txt")
                ),
            )
        })
        .collect()
}
