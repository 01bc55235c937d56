//! Size-limited synchronous reads.

use std::fs as std_fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::detect::decode_buffer;
use crate::error::IoError;

/// Default read limit for a single note or index document (8 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 8 * 1024 * 1024;

fn read_limited(path: &Path, max_bytes: u64) -> Result<Vec<u8>, IoError> {
    let metadata = std_fs::metadata(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_string_lossy().to_string()),
        _ => IoError::System(error),
    })?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = std_fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Read text from a file with size and binary checks.
///
/// The file handle is dropped before this returns, so callers iterating over
/// many notes never hold more than one open file.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Errors
/// `IoError::NotFound` only when the path does not exist; permission and
/// other filesystem failures surface as `IoError::System`.
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    decode_buffer(read_limited(path.as_ref(), max_bytes)?)
}

/// Read text from a file with a size check but no binary check.
///
/// Content never fails the read: NUL bytes are kept and invalid UTF-8 is
/// replaced with U+FFFD.
///
/// # Errors
/// Same as [`read_text_safe`], minus `IoError::BinaryFile`.
pub fn read_text_lossy<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let buffer = read_limited(path.as_ref(), max_bytes)?;
    Ok(match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
