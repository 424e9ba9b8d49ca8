//! Error types for the cataloguer.

use crate::generators::mnfo::SidecarField;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the cataloguer.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("MediaInfo not found. Install it: sudo apt install mediainfo")]
    MediaInfoNotFound,

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // Container name errors
    #[error("Invalid container name \"{name}\": {tokens} fields (expected 1 to 6)")]
    InvalidFilenameStructure { name: String, tokens: usize },

    // Probe errors
    #[error("MediaInfo failed: {0}")]
    ProbeFailed(String),

    #[error("MediaInfo timed out after {seconds}s for: {path}")]
    ProbeTimeout { path: String, seconds: u64 },

    // Sidecar errors
    #[error("Media info file not found: {0}")]
    SidecarMissing(String),

    #[error("Invalid media info file {path}: {lines} significant lines (expected 9)")]
    SidecarTooShort { path: String, lines: usize },

    #[error("Invalid {0} line in media info file")]
    InvalidSidecarField(SidecarField),

    // Rename / delete errors
    #[error("\"{from}\" could not be renamed to \"{to}\": {reason}")]
    RenameFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("{path} could not be deleted: {reason}")]
    ArtifactDeletion { path: String, reason: String },

    // Config errors
    #[error("Invalid config file: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error should stop the whole batch rather than one file.
    pub fn is_fatal(&self, stop_on_rename_failure: bool) -> bool {
        match self {
            Error::MediaInfoNotFound => true,
            Error::RenameFailed { .. } => stop_on_rename_failure,
            _ => false,
        }
    }
}
