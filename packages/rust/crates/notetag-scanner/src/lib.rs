//! notetag-scanner - Note discovery and extraction.
//!
//! This crate covers the front half of the notetag pipeline:
//! - `discover` - Walks a notes root and lists every `*.md` file
//! - `parser` - Pure extraction of the `**Tags:**` line and the title heading
//! - `scanner` - Reads discovered files and turns them into [`NoteRecord`]s
//!
//! # Architecture
//!
//! ```text
//! notetag-scanner/src/
//! ├── lib.rs          # Module declarations and exports
//! ├── error.rs        # ScanError
//! ├── types.rs        # NoteRecord
//! ├── discover.rs     # File discovery (walkdir)
//! ├── parser.rs       # Tag/title extraction
//! └── scanner.rs      # NoteScanner
//! ```
//!
//! # Note Format
//!
//! ```markdown
//! # Goroutine leak hunting
//!
//! **Tags:** #go #testing
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod discover;
mod error;
pub mod parser;
pub mod scanner;
mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use discover::{DiscoverOptions, NOTE_EXTENSION, discover_notes, ensure_root};
pub use error::ScanError;
pub use parser::{TAGS_MARKER, extract_tags, extract_title};
pub use scanner::{NoteScanner, relative_link_path};
pub use types::NoteRecord;
