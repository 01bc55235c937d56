//! The full run: discover → parse → aggregate → render → update.

use notetag_io::write_text_atomic;
use notetag_scanner::{NoteRecord, NoteScanner};

use crate::aggregate::TagIndex;
use crate::document::{Placement, load_document, splice_tag_section};
use crate::error::IndexError;
use crate::render::render_tag_section;
use crate::settings::IndexConfig;

/// Whether the run persists the updated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Rewrite the index document.
    Write,
    /// Compute everything, write nothing.
    DryRun,
}

/// What a run did.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Notes discovered and parsed
    pub note_count: usize,
    /// Distinct tags found
    pub tag_count: usize,
    /// Aggregated index
    pub index: TagIndex,
    /// How the tag block was placed
    pub placement: Placement,
    /// `true` when the document did not exist before the run
    pub synthesized: bool,
    /// `true` when the document was written
    pub written: bool,
    /// Full updated document text
    pub document: String,
}

/// Discover and parse every note under the configured root.
///
/// # Errors
/// Propagates discovery and read failures.
pub fn scan_notes(config: &IndexConfig) -> Result<Vec<NoteRecord>, IndexError> {
    let scanner = NoteScanner::new(config.link_base())
        .with_options(config.discover.clone())
        .with_max_bytes(config.max_bytes);
    Ok(scanner.scan_all(&config.notes_root)?)
}

/// Fold records into a [`TagIndex`] and log per-tag counts.
#[must_use]
pub fn build_tag_index(records: &[NoteRecord]) -> TagIndex {
    let index = TagIndex::from_records(records);
    for (tag, count) in index.stats() {
        tracing::info!(tag = %tag, files = count, "tag statistics");
    }
    index
}

/// Run the whole pipeline once.
///
/// Every run recomputes the index from scratch. In [`RunMode::Write`] the
/// document is replaced atomically; a failed write leaves the previous
/// document in place.
///
/// # Errors
/// Any filesystem failure aborts the run with the corresponding
/// [`IndexError`]. A missing document is not an error.
pub fn run(config: &IndexConfig, mode: RunMode) -> Result<RunReport, IndexError> {
    let records = scan_notes(config)?;
    let index = build_tag_index(&records);
    let section = render_tag_section(&index, &config.render);

    let loaded = load_document(&config.document, &config.template, config.max_bytes)?;
    let spliced = splice_tag_section(&loaded.text, &section);

    let written = match mode {
        RunMode::Write => {
            write_text_atomic(&config.document, &spliced.text).map_err(|source| {
                IndexError::WriteDocument {
                    path: config.document.display().to_string(),
                    source,
                }
            })?;
            tracing::info!(
                path = %config.document.display(),
                placement = ?spliced.placement,
                "index document updated"
            );
            true
        }
        RunMode::DryRun => false,
    };

    Ok(RunReport {
        note_count: records.len(),
        tag_count: index.len(),
        index,
        placement: spliced.placement,
        synthesized: loaded.synthesized,
        written,
        document: spliced.text,
    })
}
