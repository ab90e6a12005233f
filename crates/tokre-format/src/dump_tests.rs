use super::*;
use crate::dump::width_for_count;
use crate::set::{RawEntry, encode_set};

fn sample_set() -> Vec<u8> {
    encode_set(
        "engine-le",
        [
            RawEntry {
                name: "noun",
                payload: b"\x01\xAAB",
            },
            RawEntry {
                name: "verb",
                payload: b"",
            },
        ],
    )
    .unwrap()
}

#[test]
fn dump_set_plain() {
    let out = dump_set(&sample_set(), Colors::OFF).unwrap();
    insta::assert_snapshot!(out, @r#"
    [header]
    magic     TKRS
    version   1
    size      57
    checksum  0x83232165
    tag       "engine-le" (foreign)

    [entries]
    E0 "noun" payload 3 forward 1 reverse 1
    E1 "verb" payload 0 invalid: truncated data: expected 1 bytes, got 0
    "#);
}

#[test]
fn dump_set_marks_own_tag_compatible() {
    let bytes = encode_set(version_tag(), []).unwrap();
    let out = dump_set(&bytes, Colors::OFF).unwrap();
    assert!(out.contains("(compatible)"));
    assert!(out.contains("[entries]\n"));
}

#[test]
fn dump_set_colored() {
    let out = dump_set(&sample_set(), Colors::ON).unwrap();
    assert!(out.starts_with("\x1b[34m[header]\x1b[0m\n"));
    assert!(out.contains("\x1b[31m\"engine-le\"\x1b[0m"));
}

#[test]
fn dump_set_rejects_garbage() {
    let err = dump_set(b"not a set", Colors::OFF).unwrap_err();
    assert!(matches!(err, FormatError::FileTooSmall(9)));
}

#[test]
fn dump_pattern_plain() {
    let out = dump_pattern(&[4, 1, 0xAA, b'x', b'y'], Colors::OFF).unwrap();
    insta::assert_snapshot!(out, @r"
    [pattern]
    payload  4
    forward  1
    reverse  2
    ");
}

#[test]
fn dump_pattern_rejects_trailing_bytes() {
    let err = dump_pattern(&[1, 0, 7, 7], Colors::OFF).unwrap_err();
    assert!(matches!(err, FormatError::TrailingBytes(2)));
}

#[test]
fn index_width() {
    assert_eq!(width_for_count(0), 1);
    assert_eq!(width_for_count(10), 1);
    assert_eq!(width_for_count(11), 2);
    assert_eq!(width_for_count(101), 3);
}
