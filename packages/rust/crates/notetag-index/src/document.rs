//! Index document handling: marker-bounded region splice.
//!
//! The document is split into prefix / region / suffix by literal search:
//! the region starts at the first [`TAGS_START`] and ends at the first
//! [`TAGS_END`] after it. Text outside the region is never touched.

use std::path::Path;

use notetag_io::read_text_safe;
use serde::Serialize;

use crate::error::IndexError;

/// Line opening the managed region.
pub const TAGS_START: &str = "<!-- TAGS_START -->";
/// Line closing the managed region.
pub const TAGS_END: &str = "<!-- TAGS_END -->";

/// Title and description used when the index document does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    /// Top-level heading text
    pub title: String,
    /// One-paragraph description under the heading
    pub description: String,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self {
            title: "Today I Learned".to_string(),
            description: "Daily study notes, grouped by tag.".to_string(),
        }
    }
}

impl DocumentTemplate {
    /// Minimal document with an empty tag region.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "# {}\n\n{}\n\n{TAGS_START}\n{TAGS_END}\n",
            self.title, self.description
        )
    }
}

/// Document text as loaded for an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    /// Full document text
    pub text: String,
    /// `true` when the file was absent and `text` came from the template
    pub synthesized: bool,
}

/// Read the index document, synthesizing it from `template` when absent.
///
/// # Errors
/// `IndexError::ReadDocument` for every failure other than a missing file.
pub fn load_document(
    path: &Path,
    template: &DocumentTemplate,
    max_bytes: u64,
) -> Result<LoadedDocument, IndexError> {
    match read_text_safe(path, max_bytes) {
        Ok(text) => Ok(LoadedDocument {
            text,
            synthesized: false,
        }),
        Err(error) if error.is_not_found() => {
            tracing::info!(path = %path.display(), "index document missing; using default");
            Ok(LoadedDocument {
                text: template.render(),
                synthesized: true,
            })
        }
        Err(source) => Err(IndexError::ReadDocument {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Where the tag block ended up.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// An existing marker region was replaced.
    Replaced,
    /// No region was found; a new one was appended.
    Appended,
}

/// Result of [`splice_tag_section`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    /// Updated document text
    pub text: String,
    /// How the block was placed
    pub placement: Placement,
}

/// Byte range of the managed region, markers included.
fn locate_region(document: &str) -> Option<(usize, usize)> {
    let start = document.find(TAGS_START)?;
    let search_from = start + TAGS_START.len();
    let end = document[search_from..].find(TAGS_END)? + search_from + TAGS_END.len();
    Some((start, end))
}

fn tag_block(section: &str) -> String {
    format!(
        "{TAGS_START}\n\n{}\n\n{TAGS_END}",
        section.trim_end_matches('\n')
    )
}

/// Replace the managed region with `section`, or append a region if none.
///
/// Only the first start marker and the next end marker after it are
/// replaced; later marker pairs are left as ordinary text. A start marker
/// without a following end marker counts as no region.
#[must_use]
pub fn splice_tag_section(document: &str, section: &str) -> Spliced {
    let block = tag_block(section);

    if let Some((start, end)) = locate_region(document) {
        let mut text = String::with_capacity(document.len() + block.len());
        text.push_str(&document[..start]);
        text.push_str(&block);
        text.push_str(&document[end..]);
        return Spliced {
            text,
            placement: Placement::Replaced,
        };
    }

    let mut text = document.to_string();
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push('\n');
    text.push_str(&block);
    text.push('\n');
    Spliced {
        text,
        placement: Placement::Appended,
    }
}
