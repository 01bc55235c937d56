//! Tests for NoteScanner - discovery plus extraction over a temp tree.

use std::path::Path;
use tempfile::TempDir;

use notetag_scanner::{DiscoverOptions, NoteScanner, ScanError, discover_notes};

fn write_note(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
}

#[test]
fn test_scan_document_with_tags_and_title() {
    let temp_dir = TempDir::new().unwrap();
    write_note(
        temp_dir.path(),
        "2026/10/19-goroutines.md",
        "# Goroutine leaks\n\n**Tags:** #go #concurrency\n\nbody\n",
    );

    let scanner = NoteScanner::new(temp_dir.path());
    let record = scanner
        .scan_document(&temp_dir.path().join("2026/10/19-goroutines.md"))
        .unwrap()
        .unwrap();

    assert_eq!(record.path, "2026/10/19-goroutines.md");
    assert_eq!(record.title, "Goroutine leaks");
    assert_eq!(record.tags, vec!["go", "concurrency"]);
}

#[test]
fn test_scan_document_without_tags() {
    let temp_dir = TempDir::new().unwrap();
    write_note(temp_dir.path(), "plain.md", "no heading, no tags\n");

    let scanner = NoteScanner::new(temp_dir.path());
    let record = scanner
        .scan_document(&temp_dir.path().join("plain.md"))
        .unwrap()
        .unwrap();

    assert_eq!(record.title, "");
    assert!(record.tags.is_empty());
}

#[test]
fn test_scan_all_recurses_and_filters() {
    let temp_dir = TempDir::new().unwrap();
    write_note(temp_dir.path(), "a.md", "# A\n**Tags:** #x\n");
    write_note(temp_dir.path(), "sub/b.md", "# B\n");
    write_note(temp_dir.path(), "sub/deeper/c.md", "# C\n");
    write_note(temp_dir.path(), "sub/notes.txt", "# ignored\n");

    let scanner = NoteScanner::new(temp_dir.path());
    let records = scanner.scan_all(temp_dir.path()).unwrap();

    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["a.md", "sub/b.md", "sub/deeper/c.md"]);
}

#[test]
fn test_scan_all_creates_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("2026").join("10");

    let scanner = NoteScanner::new(temp_dir.path());
    let records = scanner.scan_all(&root).unwrap();

    assert!(records.is_empty());
    assert!(root.is_dir());
}

#[test]
fn test_note_with_nul_byte_is_indexed() {
    let temp_dir = TempDir::new().unwrap();
    write_note(temp_dir.path(), "a.md", "# A\n**Tags:** #go\n");
    write_note(temp_dir.path(), "b.md", "# B\n**Tags:** #go\npasted \u{0} byte\n");

    let scanner = NoteScanner::new(temp_dir.path());
    let records = scanner.scan_all(temp_dir.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].path, "b.md");
    assert_eq!(records[1].title, "B");
    assert_eq!(records[1].tags, vec!["go"]);
}

#[test]
fn test_oversized_note_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    write_note(temp_dir.path(), "big.md", "# Big\n**Tags:** #x\n");
    write_note(temp_dir.path(), "ok.md", "#");

    let scanner = NoteScanner::new(temp_dir.path()).with_max_bytes(4);
    let records = scanner.scan_all(temp_dir.path()).unwrap();

    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["ok.md"]);
}

#[test]
fn test_links_climb_out_of_document_dir() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("2026/10");
    write_note(&root, "a.md", "# A\n**Tags:** #go\n");

    let scanner = NoteScanner::new(temp_dir.path().join("docs"));
    let records = scanner.scan_all(&root).unwrap();

    assert_eq!(records[0].path, "../2026/10/a.md");
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_aborts_walk() {
    let temp_dir = TempDir::new().unwrap();
    write_note(temp_dir.path(), "a.md", "# A\n");
    std::os::unix::fs::symlink(
        temp_dir.path().join("missing-target.md"),
        temp_dir.path().join("b.md"),
    )
    .unwrap();

    let result = discover_notes(temp_dir.path(), &DiscoverOptions::default());

    assert!(matches!(result, Err(ScanError::Walk { .. })));
}

#[cfg(unix)]
#[test]
fn test_walk_failure_aborts_scan() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("sub")).unwrap();
    std::os::unix::fs::symlink(
        temp_dir.path().join("gone"),
        temp_dir.path().join("sub").join("link"),
    )
    .unwrap();

    let scanner = NoteScanner::new(temp_dir.path());
    assert!(matches!(
        scanner.scan_all(temp_dir.path()),
        Err(ScanError::Walk { .. })
    ));
}
