//! Tests for text encoding through each layer.

use std::io::Write;

use crate::layer::Binmode;
use crate::tests::support::octets_with;

#[test]
fn utf8_layer_writes_utf8() {
    let out = octets_with(&Binmode::default(), |h| h.print("é"));
    assert_eq!(out, vec![0xC3, 0xA9]);
}

#[test]
fn raw_layer_writes_one_octet_per_char() {
    let out = octets_with(&Binmode::raw(), |h| h.print("é"));
    assert_eq!(out, vec![0xE9]);
}

#[test]
fn raw_layer_falls_back_to_utf8_for_wide_chars() {
    let out = octets_with(&Binmode::raw(), |h| h.print("a€"));
    assert_eq!(out, "a€".as_bytes());
}

#[test]
fn named_encoding_encodes_text() {
    let latin1 = Binmode::parse("encoding(iso-8859-1)").unwrap();
    let out = octets_with(&latin1, |h| h.print("café"));
    assert_eq!(out, b"caf\xE9".to_vec());
}

#[test]
fn unmappable_chars_are_escaped() {
    let latin1 = Binmode::parse("encoding(iso-8859-1)").unwrap();
    let out = octets_with(&latin1, |h| h.print("aĀb"));
    assert_eq!(out, b"a\\x{0100}b".to_vec());
}

#[test]
fn latin1_keeps_c1_controls_and_escapes_wider_chars() {
    let latin1 = Binmode::parse("encoding(latin1)").unwrap();
    let out = octets_with(&latin1, |h| h.print("€\u{0080}"));
    assert_eq!(out, b"\\x{20AC}\x80".to_vec());
}

#[test]
fn windows_1252_is_distinct_from_latin1() {
    let cp1252 = Binmode::parse("encoding(windows-1252)").unwrap();
    let out = octets_with(&cp1252, |h| h.print("€Ā"));
    assert_eq!(out, b"\x80\\x{0100}".to_vec());
}

#[test]
fn stateful_encoding_is_finished_on_close() {
    let jis = Binmode::parse("encoding(iso-2022-jp)").unwrap();
    let out = octets_with(&jis, |h| h.print("日"));
    assert!(out.starts_with(b"\x1b$B"), "{out:?}");
    assert!(out.ends_with(b"\x1b(B"), "{out:?}");
}

#[test]
fn crlf_layer_translates_text_newlines() {
    let crlf = Binmode::parse("encoding(UTF-8):crlf").unwrap();
    let out = octets_with(&crlf, |h| h.print("a\nb\n"));
    assert_eq!(out, b"a\r\nb\r\n".to_vec());
}

#[test]
fn octet_writes_only_get_crlf_translation() {
    let out = octets_with(&Binmode::default(), |h| h.octets().write_all(&[0xE9, 0xFF]));
    assert_eq!(out, vec![0xE9, 0xFF]);

    let crlf = Binmode::raw().with_crlf();
    let out = octets_with(&crlf, |h| h.octets().write_all(&[0xFF, b'\n']));
    assert_eq!(out, vec![0xFF, b'\r', b'\n']);
}
