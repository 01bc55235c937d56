//! Tests for document module - region splice and default document.

use tempfile::TempDir;

use notetag_index::{
    DocumentTemplate, Placement, TAGS_END, TAGS_START, load_document, splice_tag_section,
};

#[test]
fn test_replaces_only_marker_span() {
    let doc = "# TIL\n\nintro\n<!-- TAGS_START -->old<!-- TAGS_END -->\nfooter\n";

    let spliced = splice_tag_section(doc, "NEW");

    assert_eq!(spliced.placement, Placement::Replaced);
    assert_eq!(
        spliced.text,
        "# TIL\n\nintro\n<!-- TAGS_START -->\n\nNEW\n\n<!-- TAGS_END -->\nfooter\n"
    );
}

#[test]
fn test_only_first_region_replaced() {
    let doc = format!("{TAGS_START}a{TAGS_END}\nmiddle\n{TAGS_START}b{TAGS_END}\n");

    let spliced = splice_tag_section(&doc, "X");

    assert_eq!(
        spliced.text,
        format!("{TAGS_START}\n\nX\n\n{TAGS_END}\nmiddle\n{TAGS_START}b{TAGS_END}\n")
    );
}

#[test]
fn test_appends_when_markers_missing() {
    let doc = "# TIL\n\nHand-written text.\n";

    let spliced = splice_tag_section(doc, "SECTION");

    assert_eq!(spliced.placement, Placement::Appended);
    assert!(spliced.text.starts_with(doc));
    assert_eq!(
        &spliced.text[doc.len()..],
        "\n<!-- TAGS_START -->\n\nSECTION\n\n<!-- TAGS_END -->\n"
    );
}

#[test]
fn test_append_adds_missing_trailing_newline() {
    let spliced = splice_tag_section("no newline", "S");
    assert!(spliced.text.starts_with("no newline\n\n<!-- TAGS_START -->"));
}

#[test]
fn test_unterminated_region_appends() {
    let doc = format!("{TAGS_START}\ndangling\n");

    let spliced = splice_tag_section(&doc, "S");

    assert_eq!(spliced.placement, Placement::Appended);
    assert!(spliced.text.starts_with(&doc));
}

#[test]
fn test_splice_is_stable_on_rerun() {
    let once = splice_tag_section("# TIL\n", "S\n").text;
    let twice = splice_tag_section(&once, "S\n");

    assert_eq!(twice.placement, Placement::Replaced);
    assert_eq!(twice.text, once);
}

#[test]
fn test_load_missing_document_synthesizes_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("README.md");

    let loaded = load_document(&path, &DocumentTemplate::default(), 1024).unwrap();

    assert!(loaded.synthesized);
    assert!(loaded.text.contains(TAGS_START));
    assert!(loaded.text.contains(TAGS_END));
    assert!(!path.exists());
}

#[test]
fn test_load_existing_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("README.md");
    std::fs::write(&path, "# Mine\n").unwrap();

    let loaded = load_document(&path, &DocumentTemplate::default(), 1024).unwrap();

    assert!(!loaded.synthesized);
    assert_eq!(loaded.text, "# Mine\n");
}

#[test]
fn test_load_unreadable_document_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("README.md");
    std::fs::write(&path, "0123456789").unwrap();

    assert!(load_document(&path, &DocumentTemplate::default(), 4).is_err());
}
