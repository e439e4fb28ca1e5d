//! Tests for WritersBuilder configuration resolution.

use crate::config::DEFAULT_METHOD;
use crate::error::Error;
use crate::tests::support::Datums;
use crate::{Binmode, Handle, WriteHandle, WriterConfig, WritersBuilder};

fn say_all(_: &Datums, data: &[&'static str], handle: &mut Handle, _: ()) -> crate::Result<()> {
    for datum in data {
        handle.say(datum)?;
    }
    Ok(())
}

#[test]
fn build_without_a_method_fails() {
    let err = WritersBuilder::<Datums, [&'static str], (), ()>::new()
        .build()
        .unwrap_err();
    match err {
        Error::InvalidArgument(msg) => assert!(msg.contains(DEFAULT_METHOD), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn defaults_are_write_handle_and_utf8() {
    let writers = WritersBuilder::<Datums, [&'static str], (), ()>::default()
        .with_write_fn(say_all)
        .build()
        .unwrap();
    assert_eq!(writers.method(), "write_handle");
    assert_eq!(writers.binmode().as_str(), "encoding(UTF-8)");
}

#[test]
fn from_config_keeps_method_name_and_binmode() {
    let config = WriterConfig::new()
        .with_method("write_lines")
        .with_binmode(Binmode::raw());
    let writers = WritersBuilder::<Datums, [&'static str], (), ()>::from_config(config)
        .with_write_fn(say_all)
        .build()
        .unwrap();
    assert_eq!(writers.method(), "write_lines");
    assert_eq!(writers.binmode(), &Binmode::raw());
}

#[test]
fn invalid_binmode_is_rejected_at_build_time() {
    let result = WritersBuilder::<Datums, [&'static str], (), ()>::new().binmode("gzip");
    assert!(matches!(result, Err(Error::InvalidBinmode { .. })));
}

#[test]
fn independent_writers_do_not_interfere() {
    let utf8 = WritersBuilder::<Datums, [&'static str], (), ()>::new()
        .with_write_fn(say_all)
        .build()
        .unwrap();
    let latin1 = WritersBuilder::<Datums, [&'static str], (), ()>::new()
        .binmode("encoding(iso-8859-1)")
        .unwrap()
        .with_write_fn(say_all)
        .build()
        .unwrap();
    let copy = utf8.clone();

    assert_eq!(latin1.write_bytes(&Datums, &["ü"], ()).unwrap(), vec![0xFC, b'\n']);
    assert_eq!(utf8.write_bytes(&Datums, &["ü"], ()).unwrap(), "ü\n".as_bytes());
    assert_eq!(copy.write_string(&Datums, &["ü"], ()).unwrap(), "ü\n");
}

struct Csv;

impl WriteHandle<[(&'static str, u32)]> for Csv {
    type Output = usize;

    fn write_handle(
        &self,
        data: &[(&'static str, u32)],
        handle: &mut Handle,
        _: (),
    ) -> crate::Result<usize> {
        for (name, value) in data {
            writeln!(handle, "{name},{value}")?;
        }
        Ok(data.len())
    }

    fn linewise_config() -> WriterConfig {
        WriterConfig::new().with_binmode(Binmode::utf8().with_crlf())
    }
}

#[test]
fn for_handle_wires_the_trait_method_and_config() {
    let writers =
        WritersBuilder::<Csv, [(&'static str, u32)], (), usize>::for_handle().build().unwrap();
    assert_eq!(writers.method(), DEFAULT_METHOD);
    assert!(writers.binmode().crlf());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let rows = writers.write_file(&Csv, &[("a", 1), ("b", 2)], &path, ()).unwrap();
    assert_eq!(rows, 2);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,1\r\nb,2\r\n");
}
