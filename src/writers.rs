//! Generated write-to-file and write-to-string operations.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::config::WriteOptions;
use crate::error::{Error, Result};
use crate::io::{FileOutput, Handle, InMemorySink, OutputTarget};
use crate::layer::Binmode;

/// Type alias for a handle-writing operation.
///
/// Receives the invocant, the data, the opened handle and any extra
/// arguments, and writes the data to the handle.
pub type WriteFn<T, D, A, R> =
    Arc<dyn Fn(&T, &D, &mut Handle<'_>, A) -> Result<R> + Send + Sync>;

/// Write-to-file and write-to-string operations derived from one
/// handle-writing operation.
///
/// Built with [`WritersBuilder`](crate::WritersBuilder). The method name and
/// default binmode are fixed at build time.
pub struct Writers<T: ?Sized, D: ?Sized, A = (), R = ()> {
    method: String,
    binmode: Binmode,
    write_fn: WriteFn<T, D, A, R>,
}

impl<T: ?Sized, D: ?Sized, A, R> Clone for Writers<T, D, A, R> {
    fn clone(&self) -> Self {
        Self {
            method: self.method.clone(),
            binmode: self.binmode.clone(),
            write_fn: Arc::clone(&self.write_fn),
        }
    }
}

impl<T: ?Sized, D: ?Sized, A, R> fmt::Debug for Writers<T, D, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writers")
            .field("method", &self.method)
            .field("binmode", &self.binmode.as_str())
            .finish()
    }
}

impl<T: ?Sized, D: ?Sized, A, R> Writers<T, D, A, R> {
    pub(crate) fn new(method: String, binmode: Binmode, write_fn: WriteFn<T, D, A, R>) -> Self {
        Self {
            method,
            binmode,
            write_fn,
        }
    }

    /// Name of the handle-writing operation.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The default binmode.
    pub fn binmode(&self) -> &Binmode {
        &self.binmode
    }

    /// Write `data` to the file at `path` using the default binmode.
    ///
    /// Returns whatever the handle-writing operation returns.
    pub fn write_file(
        &self,
        invocant: &T,
        data: &D,
        path: impl AsRef<Path>,
        args: A,
    ) -> Result<R> {
        self.write_file_with(invocant, data, &WriteOptions::default(), path, args)
    }

    /// Write `data` to the file at `path`, with per-call options.
    pub fn write_file_with(
        &self,
        invocant: &T,
        data: &D,
        options: &WriteOptions,
        path: impl AsRef<Path>,
        args: A,
    ) -> Result<R> {
        let binmode = options.resolve(&self.binmode);
        write_to_file(&self.method, binmode, path.as_ref(), |handle| {
            (self.write_fn)(invocant, data, handle, args)
        })
    }

    /// Write `data` to an arbitrary output target using the default binmode.
    pub fn write_target(
        &self,
        invocant: &T,
        data: &D,
        target: &mut dyn OutputTarget,
        args: A,
    ) -> Result<R> {
        write_to_target(&self.method, target, &self.binmode, |handle| {
            (self.write_fn)(invocant, data, handle, args)
        })
    }

    /// Write `data` to an in-memory buffer and return the octets.
    pub fn write_bytes(&self, invocant: &T, data: &D, args: A) -> Result<Vec<u8>> {
        write_to_bytes(&self.method, &self.binmode, |handle| {
            (self.write_fn)(invocant, data, handle, args)
        })
    }

    /// Write `data` to an in-memory buffer and return it as a string.
    ///
    /// Fails with `NotUtf8` if the default binmode produced octets that are
    /// not UTF-8; use [`write_bytes`](Self::write_bytes) for such layers.
    pub fn write_string(&self, invocant: &T, data: &D, args: A) -> Result<String> {
        let bytes = self.write_bytes(invocant, data, args)?;
        bytes_to_string(bytes, &self.binmode)
    }
}

/// Validate `path`, open it with `binmode` and run `delegate` on the handle.
pub(crate) fn write_to_file<R>(
    method: &str,
    binmode: &Binmode,
    path: &Path,
    delegate: impl FnOnce(&mut Handle<'_>) -> Result<R>,
) -> Result<R> {
    let mut target = FileOutput::checked(path)?;
    write_to_target(method, &mut target, binmode, delegate)
}

/// Open `target`, run `delegate` on the handle and close it.
///
/// The handle is closed here on success. On failure the delegate's error is
/// returned and the handle is dropped, which releases the stream.
pub(crate) fn write_to_target<R>(
    method: &str,
    target: &mut dyn OutputTarget,
    binmode: &Binmode,
    delegate: impl FnOnce(&mut Handle<'_>) -> Result<R>,
) -> Result<R> {
    let mut handle = Handle::open(target, binmode)?;

    debug!(method, target_id = handle.id(), "Delegating to handle writer");
    let value = delegate(&mut handle)?;

    handle.close()?;
    Ok(value)
}

pub(crate) fn write_to_bytes<R>(
    method: &str,
    binmode: &Binmode,
    delegate: impl FnOnce(&mut Handle<'_>) -> Result<R>,
) -> Result<Vec<u8>> {
    let mut sink = InMemorySink::default();
    write_to_target(method, &mut sink, binmode, delegate)?;
    Ok(sink.into_inner())
}

pub(crate) fn bytes_to_string(bytes: Vec<u8>, binmode: &Binmode) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| Error::NotUtf8 {
        binmode: binmode.to_string(),
        source,
    })
}
