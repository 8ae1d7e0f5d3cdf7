//! Error types for extraction and reporting.
//!
//! Only file-level failures are errors. A doc-comment block that breaks the grammar is not
//! an error at all: the extractor just produces no record for it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced to callers of the extractor and the report formats.
#[derive(Error, Debug)]
pub enum Error {
    /// The file is missing, unreadable, or not valid UTF-8.
    #[error("Cannot read TOML file {}: {source}", .path.display())]
    FileUnreadable {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The JSON report could not be serialised.
    #[error("Failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for fallible tomldoc operations.
pub type Result<T> = std::result::Result<T, Error>;
