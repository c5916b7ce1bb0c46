//! Error types for notebook link injection.
//!
//! Library errors are explicit `thiserror` enums; the binary wraps them in `anyhow`.

use nblink_io::IoError;
use thiserror::Error;

/// Per-notebook failure. Fatal for that notebook only.
#[derive(Error, Debug)]
pub enum NotebookError {
    /// Input is not a notebook document.
    #[error("Malformed notebook {path}: {source}")]
    MalformedDocument {
        /// Notebook path.
        path: String,
        /// What was wrong with the document.
        source: DocumentError,
    },

    /// Input could not be opened or read as text.
    #[error("Cannot read {path}: {source}")]
    UnreadableFile {
        /// Notebook path.
        path: String,
        /// Underlying I/O failure.
        source: IoError,
    },

    /// Notebook path is not under the configured root, so no link target
    /// can be derived from it.
    #[error("{path} is not under root {root}")]
    OutsideRoot {
        /// Notebook path.
        path: String,
        /// Configured root.
        root: String,
    },

    /// Output could not be serialized or written.
    #[error("Cannot write {path}: {source}")]
    WriteFailure {
        /// Output path.
        path: String,
        /// Underlying I/O failure.
        source: IoError,
    },
}

/// Structural problems found while parsing a notebook document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is not an object.
    #[error("document is not a JSON object")]
    NotAnObject,

    /// No `cells` array at the top level.
    #[error("missing `cells` array")]
    MissingCells,

    /// A cell at the given index is not an object.
    #[error("cell {0} is not an object")]
    CellNotObject(usize),
}

/// Invalid injector or batch configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Repository link base is empty.
    #[error("GitHub link base must not be empty")]
    EmptyBase,

    /// Repository link base does not end with `/`.
    #[error("GitHub link base must end with '/': {0}")]
    BaseMissingSeparator(String),

    /// No notebook extensions configured.
    #[error("at least one notebook extension is required")]
    EmptyExtensions,
}
