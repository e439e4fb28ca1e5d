//! The stream handed to handle-writing operations.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use super::OutputTarget;
use crate::error::{Error, Result, Stage};
use crate::layer::{Binmode, TextEncoder, translate_octets};

/// A write-only, line-oriented output stream with a text layer applied.
///
/// All text goes through the handle's binmode: [`print`](Handle::print),
/// [`say`](Handle::say), the `write!`/`writeln!` macros, and the
/// [`std::fmt::Write`] and [`std::io::Write`] impls. Bytes given to the
/// `io::Write` impl must be UTF-8 text; a sequence split across calls is
/// held until it completes. Use [`octets`](Handle::octets) to write octets
/// below the text layer.
///
/// ```rust,ignore
/// fn write_handle(&self, data: &[String], handle: &mut Handle, _: ()) -> linewise::Result<()> {
///     for datum in data {
///         writeln!(handle, "datum: {datum}")?;
///     }
///     Ok(())
/// }
/// ```
pub struct Handle<'a> {
    id: String,
    binmode: Binmode,
    encoder: TextEncoder,
    inner: Box<dyn Write + Send + 'a>,
    scratch: Vec<u8>,
    pending: Vec<u8>,
}

impl fmt::Debug for Handle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("id", &self.id)
            .field("binmode", &self.binmode.as_str())
            .finish()
    }
}

impl<'a> Handle<'a> {
    /// Open `target` for writing (truncating) with the given binmode.
    ///
    /// The handle borrows the target until it is closed or dropped.
    pub fn open(target: &'a mut dyn OutputTarget, binmode: &Binmode) -> Result<Self> {
        let id = target.id().to_string();
        let inner = target
            .open_overwrite()
            .map_err(|e| Error::io(Stage::Open, id.clone(), e))?;

        debug!(target_id = %id, binmode = %binmode, "Opened handle");

        Ok(Self {
            id,
            binmode: binmode.clone(),
            encoder: TextEncoder::new(binmode),
            inner,
            scratch: Vec::new(),
            pending: Vec::new(),
        })
    }

    /// Identifier of the target this handle writes to.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The binmode in effect for this handle.
    pub fn binmode(&self) -> &Binmode {
        &self.binmode
    }

    /// Write text through the text layer.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.scratch.clear();
        self.encoder.encode_text(text, &mut self.scratch);
        self.inner.write_all(&self.scratch)
    }

    /// Write a line of text followed by `\n`.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        self.print(line)?;
        self.print("\n")
    }

    /// Formatted text output; lets `write!` and `writeln!` go through the
    /// text layer and keeps the underlying I/O error.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        if let Some(s) = args.as_str() {
            return self.print(s);
        }

        let mut adapter = FmtAdapter {
            handle: self,
            error: None,
        };
        match fmt::write(&mut adapter, args) {
            Ok(()) => Ok(()),
            Err(_) => Err(adapter
                .error
                .unwrap_or_else(|| io::Error::other("formatter error"))),
        }
    }

    /// Raw octet writer below the text layer. Only CRLF translation applies.
    pub fn octets(&mut self) -> Octets<'_, 'a> {
        Octets { handle: self }
    }

    /// Flush pending encoder state and the underlying stream, then release it.
    ///
    /// An incomplete UTF-8 sequence left by the `io::Write` impl is a
    /// close-stage error.
    pub fn close(mut self) -> Result<()> {
        let id = std::mem::take(&mut self.id);

        if !self.pending.is_empty() {
            let e = io::Error::new(
                io::ErrorKind::InvalidData,
                format!("incomplete UTF-8 sequence ({} bytes) at close", self.pending.len()),
            );
            return Err(Error::io(Stage::Close, id, e));
        }

        self.scratch.clear();
        self.encoder.finish(&mut self.scratch);

        self.inner
            .write_all(&self.scratch)
            .and_then(|_| self.inner.flush())
            .map_err(|e| Error::io(Stage::Close, id.clone(), e))?;

        debug!(target_id = %id, "Closed handle");
        Ok(())
    }
}

struct FmtAdapter<'h, 'a> {
    handle: &'h mut Handle<'a>,
    error: Option<io::Error>,
}

impl fmt::Write for FmtAdapter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.handle.print(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

impl fmt::Write for Handle<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s).map_err(|_| fmt::Error)
    }
}

/// Text given as UTF-8 bytes, e.g. by helpers generic over `io::Write`.
impl Write for Handle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(buf);

        let complete = match std::str::from_utf8(&bytes) {
            Ok(s) => s.len(),
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidData, e)),
        };

        let tail = bytes.split_off(complete);
        let text =
            String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.print(&text)?;
        self.pending = tail;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Octet writer returned by [`Handle::octets`].
pub struct Octets<'h, 'a> {
    handle: &'h mut Handle<'a>,
}

impl fmt::Debug for Octets<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Octets").field("id", &self.handle.id).finish()
    }
}

impl Write for Octets<'_, '_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let translated = translate_octets(buf, self.handle.binmode.crlf());
        self.handle.inner.write_all(&translated)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.handle.inner.flush()
    }
}
