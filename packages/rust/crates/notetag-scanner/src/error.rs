//! Error types for note discovery and reading.

use notetag_io::IoError;
use thiserror::Error;

/// Filesystem failures while scanning a notes root.
///
/// Every variant aborts the run; a note without tags or a title is not an
/// error and never produces one of these.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The notes root could not be created.
    #[error("failed to create notes root {path}: {source}")]
    CreateRoot {
        /// Root that was being created.
        path: String,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The notes root exists but is a file.
    #[error("notes root is not a directory: {0}")]
    NotADirectory(String),

    /// A directory could not be listed partway through the walk.
    #[error("failed to list {path}: {source}")]
    Walk {
        /// Entry the walker was visiting.
        path: String,
        /// Underlying walk failure.
        #[source]
        source: walkdir::Error,
    },

    /// A discovered note could not be read.
    #[error("failed to read note {path}: {source}")]
    Read {
        /// Note path.
        path: String,
        /// Underlying read failure.
        #[source]
        source: IoError,
    },
}
