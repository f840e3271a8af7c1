//! Error types for grove

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type returned by the core entry points.
///
/// The binary translates this into a single stderr line and a non-zero exit
/// status; the library never touches process-exit mechanics itself.
#[derive(Debug, Error)]
pub enum GroveError {
    /// Both include and exclude patterns were given for one filter category.
    #[error("cannot specify both include and exclude for {category}; use only one")]
    ConflictingFilters {
        /// Category label, e.g. "tree directories".
        category: String,
    },

    /// A filter pattern failed to compile as a regex.
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The resolved analysis root does not exist.
    #[error("path '{path}' does not exist")]
    PathNotFound { path: PathBuf },

    /// The analysis root could not be enumerated.
    #[error("failed to read directory '{path}'")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the rendered output failed.
    #[error("failed to write output")]
    Output(#[from] io::Error),

    /// Serializing the tree to JSON failed.
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GroveError>;
