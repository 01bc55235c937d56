//! Note Scanner - Reads discovered notes into [`NoteRecord`]s.
//!
//! # Example
//!
//! ```ignore
//! use notetag_scanner::NoteScanner;
//!
//! let scanner = NoteScanner::new(".");
//! let records = scanner.scan_all(Path::new("2026/10")).unwrap();
//!
//! for record in records {
//!     println!("{} -> {:?}", record.path, record.tags);
//! }
//! ```

use std::path::{Component, Path, PathBuf};

use notetag_io::{DEFAULT_MAX_BYTES, IoError, is_binary, read_text_lossy};

use crate::discover::{DiscoverOptions, discover_notes};
use crate::error::ScanError;
use crate::parser::{extract_tags, extract_title};
use crate::types::NoteRecord;

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
}

/// Components with `.` dropped and `..` folded into the preceding name.
fn lexical_components(path: &Path) -> Vec<Component<'_>> {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// Turn a note path into the link target written to the index document.
///
/// The result is relative to `base` (the document's directory), climbing
/// with `..` when the note lives outside it, and always uses `/`. Relative
/// inputs are resolved against the current directory first. Paths on
/// different roots (another Windows drive) stay absolute.
#[must_use]
pub fn relative_link_path(path: &Path, base: &Path) -> String {
    let target = absolutize(path);
    let from = absolutize(base);
    let target_parts = lexical_components(&target);
    let base_parts = lexical_components(&from);

    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return target.to_string_lossy().replace('\\', "/");
    }

    let mut parts: Vec<String> = vec!["..".to_string(); base_parts.len() - common];
    parts.extend(
        target_parts[common..]
            .iter()
            .map(|component| component.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}

/// Note Scanner - discovers notes and extracts tags and titles.
///
/// `base` is the directory of the index document; record paths are written
/// relative to it so the generated links resolve from the document.
#[derive(Debug, Clone)]
pub struct NoteScanner {
    base: PathBuf,
    options: DiscoverOptions,
    max_bytes: u64,
}

impl NoteScanner {
    /// Create a scanner whose links are relative to `base`.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            options: DiscoverOptions::default(),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }

    /// Replace the discovery options.
    #[must_use]
    pub fn with_options(mut self, options: DiscoverOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the per-note read limit in bytes.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Read one note and extract its record.
    ///
    /// A note without a tag line or a heading still yields a record, with
    /// empty tags or an empty title. Content never fails the read: NUL bytes
    /// and invalid UTF-8 are decoded lossily. A note over the size limit is
    /// skipped with a warning and yields `None`.
    ///
    /// # Errors
    /// `ScanError::Read` when the file cannot be read.
    pub fn scan_document(&self, path: &Path) -> Result<Option<NoteRecord>, ScanError> {
        let content = match read_text_lossy(path, self.max_bytes) {
            Ok(content) => content,
            Err(IoError::TooLarge(size, limit)) => {
                tracing::warn!(
                    path = %path.display(),
                    size,
                    limit,
                    "note exceeds size limit; skipping"
                );
                return Ok(None);
            }
            Err(source) => {
                return Err(ScanError::Read {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        if is_binary(content.as_bytes()) {
            tracing::warn!(path = %path.display(), "note contains NUL bytes; indexing anyway");
        }

        let tags = extract_tags(&content);
        let title = extract_title(&content);
        let record = NoteRecord {
            path: relative_link_path(path, &self.base),
            title,
            tags,
        };

        if record.tags.is_empty() {
            tracing::info!(path = %record.path, "no tag line found");
        } else {
            tracing::info!(path = %record.path, tags = ?record.tags, "extracted tags");
        }
        tracing::info!(path = %record.path, title = %record.title, "extracted title");

        Ok(Some(record))
    }

    /// Discover and read every note under `root`, in discovery order.
    ///
    /// Files are read one at a time; the first filesystem failure aborts the
    /// scan. Oversized notes are left out.
    ///
    /// # Errors
    /// Propagates discovery and read failures.
    pub fn scan_all(&self, root: &Path) -> Result<Vec<NoteRecord>, ScanError> {
        let notes = discover_notes(root, &self.options)?;
        let mut records = Vec::with_capacity(notes.len());
        for path in &notes {
            if let Some(record) = self.scan_document(path)? {
                records.push(record);
            }
        }
        Ok(records)
    }
}

impl Default for NoteScanner {
    fn default() -> Self {
        Self::new("")
    }
}
