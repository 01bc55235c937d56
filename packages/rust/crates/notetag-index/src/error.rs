//! Error types for the index pipeline.

use notetag_io::IoError;
use notetag_scanner::ScanError;
use thiserror::Error;

/// Fatal pipeline failures. Any of these aborts the run.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Discovery or note reading failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The index document exists but could not be read.
    #[error("failed to read index document {path}: {source}")]
    ReadDocument {
        /// Document path.
        path: String,
        /// Underlying read failure.
        #[source]
        source: IoError,
    },

    /// The updated index document could not be written.
    #[error("failed to write index document {path}: {source}")]
    WriteDocument {
        /// Document path.
        path: String,
        /// Underlying write failure.
        #[source]
        source: IoError,
    },
}
