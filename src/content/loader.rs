//! Content file loading.
//!
//! Content comes from one of three places, first match wins:
//! 1. An explicit path (`--content` or `FOLIO_CONTENT`)
//! 2. The `content` setting in the config file
//! 3. The default content embedded in the binary

use std::fs;
use std::path::Path;

use crate::config::Settings;
use crate::content::builtin;
use crate::content::schema::ContentStore;
use crate::content::validator::validate;
use crate::error::{FolioError, Result};

/// Format of a content file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Yaml,
    Json,
}

impl ContentFormat {
    /// Pick the format for a path. Anything that is not `.json` is YAML.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Load a single content file.
///
/// # Errors
///
/// Returns `ContentNotFound` if the file doesn't exist.
/// Returns `ContentParseError` if the file is not valid YAML/JSON for the schema.
pub fn load_content_file(path: &Path) -> Result<ContentStore> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FolioError::ContentNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FolioError::Io(e)
        }
    })?;

    parse_content(&raw, path)
}

/// Parse content text, using the path for format selection and error reporting.
pub fn parse_content(raw: &str, source_path: &Path) -> Result<ContentStore> {
    let parsed = match ContentFormat::for_path(source_path) {
        ContentFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
        ContentFormat::Yaml => serde_yaml::from_str(raw).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| FolioError::ContentParseError {
        path: source_path.to_path_buf(),
        message,
    })
}

/// Resolve, load and validate the content for this run.
///
/// Relative `content` paths from settings resolve against `base_dir`.
pub fn resolve_content(
    override_path: Option<&Path>,
    settings: &Settings,
    base_dir: &Path,
) -> Result<ContentStore> {
    let content = if let Some(path) = override_path {
        tracing::debug!("Loading content from {}", path.display());
        load_content_file(path)?
    } else if let Some(path) = &settings.content {
        let path = base_dir.join(path);
        tracing::debug!("Loading content from settings: {}", path.display());
        load_content_file(&path)?
    } else {
        tracing::debug!("Using built-in content");
        builtin::load()?
    };

    validate(&content)?;
    Ok(content)
}
