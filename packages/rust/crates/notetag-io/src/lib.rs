#![allow(clippy::doc_markdown)]

//! notetag-io - File I/O for the notetag pipeline
//!
//! Reads note files and the index document defensively, and writes the
//! index document back without ever leaving a half-written file behind.
//!
//! # Features
//!
//! - **Safety**: Size limits on every read, binary detection for the document
//! - **Atomic writes**: temp file + fsync + rename
//! - **Lossy UTF-8**: invalid sequences decode to U+FFFD instead of failing
//!
//! # Architecture
//!
//! ```text
//! notetag-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! ├── sync.rs     # Size-limited strict and lossy reads
//! └── atomic.rs   # Atomic text writes
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use notetag_io::{read_text_safe, write_text_atomic};
//!
//! let readme = read_text_safe("README.md", 1024 * 1024)?;
//! write_text_atomic("README.md", &readme)?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod atomic;
mod detect;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use atomic::write_text_atomic;
pub use error::IoError;
pub use sync::{DEFAULT_MAX_BYTES, read_text_lossy, read_text_safe};

// Re-export detection utilities for advanced use
pub use detect::{decode_buffer, is_binary};
