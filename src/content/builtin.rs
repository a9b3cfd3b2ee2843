//! Default portfolio content embedded at compile time.

use include_dir::{include_dir, Dir};

use crate::content::schema::ContentStore;
use crate::error::{FolioError, Result};

/// Embedded content directory.
static CONTENT_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/content");

/// Name of the default content file inside the embedded directory.
pub const DEFAULT_FILE: &str = "portfolio.yml";

/// Raw YAML of the embedded default content.
pub fn source() -> Result<&'static str> {
    let file = CONTENT_DIR
        .get_file(DEFAULT_FILE)
        .ok_or_else(|| FolioError::ContentNotFound {
            path: format!("content/{}", DEFAULT_FILE).into(),
        })?;

    file.contents_utf8()
        .ok_or_else(|| FolioError::ContentParseError {
            path: format!("content/{}", DEFAULT_FILE).into(),
            message: "Invalid UTF-8".to_string(),
        })
}

/// Load the embedded default content.
pub fn load() -> Result<ContentStore> {
    let content = source()?;
    serde_yaml::from_str(content).map_err(|e| FolioError::ContentParseError {
        path: format!("content/{}", DEFAULT_FILE).into(),
        message: e.to_string(),
    })
}
