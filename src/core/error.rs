//! Defines the custom error types for the crawl-json library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a JSON document into a [`CrawlerConfiguration`].
///
/// [`CrawlerConfiguration`]: crate::CrawlerConfiguration
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// The configuration file could not be opened or read.
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON, or a known field has the wrong type.
    #[error("Malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `startPages` is absent or empty.
    #[error("Configuration must contain at least one entry in 'startPages'")]
    MissingStartPages,

    /// One of the `ignoredUrls` / `ignoredWords` entries is not a valid regex.
    #[error("Invalid regex in '{field}': '{pattern}': {source}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A numeric field is outside its allowed range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failure to persist a [`CrawlResult`].
///
/// [`CrawlResult`]: crate::CrawlResult
#[derive(Error, Debug)]
pub enum ResultWriteError {
    /// The destination file could not be opened or written.
    #[error("Failed to write crawl result to '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to a caller supplied stream failed.
    #[error("Failed to write crawl result to stream: {0}")]
    Stream(#[source] io::Error),

    /// Serialization failed.
    #[error("Failed to serialize crawl result: {0}")]
    Json(#[source] serde_json::Error),
}

impl From<serde_json::Error> for ResultWriteError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports writer failures as its own error kind.
        match err.io_error_kind() {
            Some(kind) => ResultWriteError::Stream(io::Error::new(kind, err)),
            None => ResultWriteError::Json(err),
        }
    }
}

/// The primary error type for callers that drive both components.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error occurring during configuration loading or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigLoadError),

    /// Error occurring while persisting a crawl result.
    #[error("Result Write Error: {0}")]
    ResultWrite(#[from] ResultWriteError),

    /// Error reading a crawl result document back.
    #[error("Result Read Error: {0}")]
    ResultRead(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
