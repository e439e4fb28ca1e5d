//! Tests for Handle text output and lifecycle.

use std::io::{self, Write};

use crate::error::{Error, Stage};
use crate::layer::Binmode;
use crate::tests::support::{FailingFlush, FailingOpen, octets_with};
use crate::{Handle, InMemorySink};

/// Writes through whatever `io::Write` it is given, as a generic helper
/// outside the crate would.
fn emit<W: Write>(w: &mut W, word: &str) -> io::Result<()> {
    writeln!(w, "{word}")
}

#[test]
fn say_and_write_macros_go_through_the_layer() {
    let out = octets_with(&Binmode::raw(), |h| {
        h.say("é")?;
        write!(h, "{}-{}", 1, "ü")?;
        writeln!(h)
    });
    assert_eq!(out, vec![0xE9, b'\n', b'1', b'-', 0xFC, b'\n']);
}

#[test]
fn generic_io_write_helpers_are_encoded() {
    let latin1 = Binmode::parse("encoding(iso-8859-1)").unwrap();
    let out = octets_with(&latin1, |h| emit(h, "café"));
    assert_eq!(out, vec![0x63, 0x61, 0x66, 0xE9, 0x0A]);
}

#[test]
fn fmt_write_is_encoded() {
    let latin1 = Binmode::parse("encoding(latin1)").unwrap();
    let out = octets_with(&latin1, |h| {
        std::fmt::Write::write_str(h, "né").map_err(|_| io::Error::other("fmt"))
    });
    assert_eq!(out, b"n\xE9".to_vec());
}

#[test]
fn utf8_sequence_split_across_writes_is_joined() {
    let latin1 = Binmode::parse("encoding(iso-8859-1)").unwrap();
    let out = octets_with(&latin1, |h| {
        h.write_all(&[b'a', 0xC3])?;
        h.write_all(&[0xA9, b'b'])
    });
    assert_eq!(out, b"a\xE9b".to_vec());
}

#[test]
fn invalid_utf8_is_rejected() {
    let mut sink = InMemorySink::new("mem");
    let mut handle = Handle::open(&mut sink, &Binmode::default()).unwrap();
    let err = handle.write_all(&[0xFF, b'a']).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn incomplete_utf8_at_close_is_a_close_stage_error() {
    let mut sink = InMemorySink::new("mem");
    let mut handle = Handle::open(&mut sink, &Binmode::default()).unwrap();
    handle.write_all(&[b'a', 0xE2, 0x82]).unwrap();
    let err = handle.close().unwrap_err();
    assert_eq!(err.stage(), Some(Stage::Close));
}

#[test]
fn octets_bypass_the_text_layer() {
    let out = octets_with(&Binmode::default(), |h| {
        h.print("é")?;
        h.octets().write_all(&[0xE9, 0xFF])
    });
    assert_eq!(out, vec![0xC3, 0xA9, 0xE9, 0xFF]);
}

#[test]
fn handle_reports_id_and_binmode() {
    let mut sink = InMemorySink::new("mem");
    let binmode = Binmode::parse("raw:crlf").unwrap();
    let handle = Handle::open(&mut sink, &binmode).unwrap();
    assert_eq!(handle.id(), "mem");
    assert_eq!(handle.binmode(), &binmode);
    handle.close().unwrap();
}

#[test]
fn open_failure_is_an_open_stage_io_error() {
    let err = Handle::open(&mut FailingOpen, &Binmode::default()).unwrap_err();
    match err {
        Error::Io {
            stage,
            target,
            source,
        } => {
            assert_eq!(stage, Stage::Open);
            assert_eq!(target, "fail://open");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn close_failure_is_a_close_stage_io_error() {
    let mut target = FailingFlush;
    let mut handle = Handle::open(&mut target, &Binmode::default()).unwrap();
    handle.say("line").unwrap();
    let err = handle.close().unwrap_err();
    assert_eq!(err.stage(), Some(Stage::Close));
    assert!(err.to_string().contains("simulated disk full"), "{err}");
}
