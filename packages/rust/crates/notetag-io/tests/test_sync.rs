//! Tests for sync module - size-limited reads.

use std::io::Write;
use tempfile::TempDir;

use notetag_io::{IoError, read_text_lossy, read_text_safe};

#[test]
fn test_sync_read() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("note.md");
    std::fs::write(&p, "# Title\n**Tags:** #go\n").unwrap();
    assert_eq!(
        read_text_safe(&p, 1024).unwrap(),
        "# Title\n**Tags:** #go\n"
    );
}

#[test]
fn test_sync_binary() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("binary.md");
    let mut file = std::fs::File::create(&p).unwrap();
    file.write_all(b"\x00\x01\x02\x03").unwrap();
    assert!(matches!(read_text_safe(&p, 1024), Err(IoError::BinaryFile)));
}

#[test]
fn test_file_too_large() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("large.md");
    std::fs::write(&p, "12345678901234567890").unwrap();
    assert!(matches!(
        read_text_safe(&p, 10),
        Err(IoError::TooLarge(20, 10))
    ));
}

#[test]
fn test_file_not_found() {
    let result = read_text_safe("/nonexistent/README.md", 1024);
    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}

#[test]
fn test_lossy_read_accepts_binary_content() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("note.md");
    std::fs::write(&p, b"**Tags:** #go\x00\n").unwrap();
    assert_eq!(
        read_text_lossy(&p, 1024).unwrap(),
        "**Tags:** #go\u{0}\n"
    );
}

#[test]
fn test_lossy_read_still_enforces_limit() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("large.md");
    std::fs::write(&p, "12345678901234567890").unwrap();
    assert!(matches!(
        read_text_lossy(&p, 10),
        Err(IoError::TooLarge(20, 10))
    ));
}
