//! Atomic text writes for the index document.

use std::io::Write;
use std::path::Path;

use crate::error::IoError;

/// Write text content atomically:
/// - ensure parent directory exists
/// - write to a temp file in the same directory
/// - fsync file + rename into place
///
/// A crash at any point leaves either the old file or the new one on disk.
///
/// # Errors
/// Returns `IoError::System` when any step fails; the temp file is removed
/// on a failed rename.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("document.md");
    let temp_path = parent.join(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()));

    let mut temp_file = std::fs::File::create(&temp_path)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.sync_all()?;
    drop(temp_file);

    if let Err(error) = std::fs::rename(&temp_path, path) {
        tracing::warn!(
            temp = %temp_path.display(),
            target = %path.display(),
            error = %error,
            "rename failed; removing temporary file"
        );
        let _ = std::fs::remove_file(&temp_path);
        return Err(IoError::System(error));
    }

    Ok(())
}
