//! Tests for detect module - binary detection and text decoding.

use notetag_io::{IoError, decode_buffer, is_binary};

#[test]
fn test_binary_detection() {
    assert!(is_binary(b"\x00\x01\x02\x03"));
    assert!(!is_binary(b"**Tags:** #go"));
    assert!(!is_binary(b""));
}

#[test]
fn test_decode_binary() {
    let result = decode_buffer(b"\x00\x01\x02".to_vec());
    assert!(matches!(result, Err(IoError::BinaryFile)));
}

#[test]
fn test_decode_utf8_lossy() {
    let result = decode_buffer(vec![0x23, 0x20, 0x48, 0xff, 0x69]).unwrap();
    assert_eq!(result, "# H\u{fffd}i");
}
