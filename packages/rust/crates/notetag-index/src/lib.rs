//! notetag-index - Tag aggregation and index-document maintenance.
//!
//! The back half of the notetag pipeline: fold [`NoteRecord`]s into a
//! [`TagIndex`], render it as a collapsible markdown section, and splice that
//! section between the `<!-- TAGS_START -->` / `<!-- TAGS_END -->` markers of
//! the index document.
//!
//! # Architecture
//!
//! ```text
//! notetag-index/src/
//! ├── lib.rs          # Module declarations and exports
//! ├── error.rs        # IndexError
//! ├── aggregate.rs    # TagIndex
//! ├── render.rs       # Section renderer
//! ├── document.rs     # Marker region splice, default document
//! ├── settings.rs     # YAML settings + resolved IndexConfig
//! ├── pipeline.rs     # Discover → parse → aggregate → render → update
//! └── bin/notetag.rs  # CLI
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use notetag_index::{IndexConfig, RunMode, run};
//!
//! let config = IndexConfig::new("2026/10", "README.md");
//! let report = run(&config, RunMode::Write)?;
//! println!("{} notes, {} tags", report.note_count, report.tag_count);
//! ```
//!
//! [`NoteRecord`]: notetag_scanner::NoteRecord

// ============================================================================
// Module Declarations
// ============================================================================

pub mod aggregate;
pub mod document;
mod error;
pub mod pipeline;
pub mod render;
pub mod settings;

// ============================================================================
// Re-exports
// ============================================================================

pub use aggregate::{TagEntry, TagIndex};
pub use document::{
    DocumentTemplate, LoadedDocument, Placement, Spliced, TAGS_END, TAGS_START, load_document,
    splice_tag_section,
};
pub use error::IndexError;
pub use pipeline::{RunMode, RunReport, build_tag_index, run, scan_notes};
pub use render::{RenderOptions, render_tag_section};
pub use settings::{
    IndexConfig, NotetagSettings, load_settings, load_settings_from_paths, month_root,
    settings_paths,
};
