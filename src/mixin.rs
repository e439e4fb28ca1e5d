//! Trait surface: implement `write_handle`, get the file and string writers.
//!
//! # Example
//!
//! ```rust,ignore
//! use linewise::{Handle, LinewiseWriters, WriteHandle};
//!
//! struct Datums;
//!
//! impl WriteHandle<[&str]> for Datums {
//!     type Output = ();
//!
//!     fn write_handle(&self, data: &[&str], handle: &mut Handle, _: ()) -> linewise::Result<()> {
//!         for datum in data {
//!             writeln!(handle, "datum: {datum}")?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let text = Datums.write_string(&["a", "b"][..], ())?;
//! assert_eq!(text, "datum: a\ndatum: b\n");
//! Datums.write_file(&["a", "b"][..], "/tmp/out.txt", ())?;
//! ```

use std::path::Path;

use crate::config::{WriteOptions, WriterConfig};
use crate::error::Result;
use crate::io::Handle;
use crate::writers::{bytes_to_string, write_to_bytes, write_to_file};

/// A type that knows how to write `D` to a handle.
///
/// `A` carries any extra arguments forwarded verbatim from the generated
/// operations; use `()` when there are none.
pub trait WriteHandle<D: ?Sized, A = ()> {
    /// Value returned by `write_handle` and passed back by `write_file`.
    type Output;

    fn write_handle(&self, data: &D, handle: &mut Handle<'_>, args: A) -> Result<Self::Output>;

    /// Generation-time configuration for this type's writers.
    ///
    /// Override to change the default binmode or the method name used in
    /// logs.
    fn linewise_config() -> WriterConfig
    where
        Self: Sized,
    {
        WriterConfig::default()
    }
}

/// File and string writers for every [`WriteHandle`] implementor.
pub trait LinewiseWriters<D: ?Sized, A = ()>: WriteHandle<D, A> + Sized {
    /// Write `data` to the file at `path` with the type's default binmode.
    fn write_file(&self, data: &D, path: impl AsRef<Path>, args: A) -> Result<Self::Output> {
        self.write_file_with(data, &WriteOptions::default(), path, args)
    }

    /// Write `data` to the file at `path`; `options.binmode` overrides the
    /// default for this call only.
    fn write_file_with(
        &self,
        data: &D,
        options: &WriteOptions,
        path: impl AsRef<Path>,
        args: A,
    ) -> Result<Self::Output> {
        let config = Self::linewise_config();
        let binmode = options.resolve(&config.binmode);
        write_to_file(&config.method, binmode, path.as_ref(), |handle| {
            self.write_handle(data, handle, args)
        })
    }

    /// Write `data` to an in-memory buffer and return the octets.
    fn write_bytes(&self, data: &D, args: A) -> Result<Vec<u8>> {
        let config = Self::linewise_config();
        write_to_bytes(&config.method, &config.binmode, |handle| {
            self.write_handle(data, handle, args)
        })
    }

    /// Write `data` to an in-memory buffer and return it as a string.
    fn write_string(&self, data: &D, args: A) -> Result<String> {
        let config = Self::linewise_config();
        let bytes = write_to_bytes(&config.method, &config.binmode, |handle| {
            self.write_handle(data, handle, args)
        })?;
        bytes_to_string(bytes, &config.binmode)
    }
}

impl<T, D, A> LinewiseWriters<D, A> for T
where
    T: WriteHandle<D, A>,
    D: ?Sized,
{
}
