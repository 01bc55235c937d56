//! Note discovery under a notes root.
//!
//! Traversal is delegated to `walkdir`, which keeps its own stack of open
//! directories, so nesting depth never grows the call stack.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ScanError;

/// Suffix a file name must carry to count as a note.
pub const NOTE_EXTENSION: &str = ".md";

/// Options for note discovery.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// Visit directory entries in file-name order instead of listing order
    pub sort_entries: bool,
    /// Follow symbolic links to files and directories
    pub follow_links: bool,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            sort_entries: true,
            follow_links: true,
        }
    }
}

/// Create the notes root if it does not exist yet.
///
/// Returns `true` when the directory was created by this call.
///
/// # Errors
/// `ScanError::NotADirectory` when a file sits at `root`,
/// `ScanError::CreateRoot` when creation fails.
pub fn ensure_root(root: &Path) -> Result<bool, ScanError> {
    if root.is_dir() {
        return Ok(false);
    }
    if root.exists() {
        return Err(ScanError::NotADirectory(root.display().to_string()));
    }
    fs::create_dir_all(root).map_err(|source| ScanError::CreateRoot {
        path: root.display().to_string(),
        source,
    })?;
    tracing::info!(root = %root.display(), "created notes root");
    Ok(true)
}

/// List every note under `root`, depth-first in pre-order.
///
/// The root is created first when missing. Any listing failure aborts the
/// walk; nothing is skipped silently.
///
/// # Errors
/// Propagates [`ensure_root`] failures and returns `ScanError::Walk` for the
/// first entry that cannot be listed.
pub fn discover_notes(root: &Path, options: &DiscoverOptions) -> Result<Vec<PathBuf>, ScanError> {
    ensure_root(root)?;

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(options.follow_links);
    if options.sort_entries {
        walker = walker.sort_by_file_name();
    }

    let mut notes = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| {
            let path = source
                .path()
                .map_or_else(|| root.display().to_string(), |p| p.display().to_string());
            ScanError::Walk { path, source }
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .ends_with(NOTE_EXTENSION)
        {
            notes.push(entry.into_path());
        }
    }

    tracing::info!(
        root = %root.display(),
        count = notes.len(),
        "discovered markdown notes"
    );
    for note in &notes {
        tracing::debug!(path = %note.display(), "note file");
    }

    Ok(notes)
}
