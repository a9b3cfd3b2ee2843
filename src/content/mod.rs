//! Portfolio content: the read-only data behind every terminal command.
//!
//! - Schema definitions in [`schema`]
//! - The embedded default content in [`builtin`]
//! - File loading and source resolution in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use folio::content::{builtin, validate};
//!
//! let content = builtin::load().unwrap();
//! validate(&content).unwrap();
//! assert_eq!(content.projects[0].name, "Falcony Search Engine");
//! ```

pub mod builtin;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_content_file, parse_content, resolve_content, ContentFormat};
pub use schema::{About, Contact, ContentStore, Experience, Hero, Project, SkillCategory, Skills};
pub use validator::{validate, validate_content, ValidationError};

/// JSON Schema for content files.
pub fn json_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(ContentStore)).unwrap_or_default()
}
