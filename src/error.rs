//! Error types for folio.
//!
//! This module defines [`FolioError`], the error type used by everything that
//! runs *around* the interpreter: loading content and config files, opening
//! links, talking to the terminal. The interpreter itself never fails; every
//! malformed command becomes an ordinary reply.
//!
//! # Error Handling Strategy
//!
//! - Use `FolioError` for startup and environment errors that need distinct handling
//! - Use `anyhow::Error` (via `FolioError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for folio operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Content file not found.
    #[error("Content file not found: {path}")]
    ContentNotFound { path: PathBuf },

    /// Failed to parse a content file.
    #[error("Failed to parse content at {path}: {message}")]
    ContentParseError { path: PathBuf, message: String },

    /// Content parsed but is unusable.
    #[error("Invalid content: {message}")]
    ContentValidationError { message: String },

    /// The system could not open a link.
    #[error("Failed to open {url}: {message}")]
    LinkOpenFailed { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
