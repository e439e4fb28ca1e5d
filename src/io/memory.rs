//! In-memory octet buffer used by the string writers.

use std::io::{self, Write};

use super::OutputTarget;

/// Octet buffer target.
///
/// Text layers encode into it exactly as they would into a file, so its
/// contents match what the file writer produces under the same binmode.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    buf: Vec<u8>,
}

impl InMemorySink {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Vec::new(),
        }
    }

    /// Octets written by the last handle opened on this sink.
    pub fn contents(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new("<string>")
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&mut self) -> io::Result<Box<dyn Write + Send + '_>> {
        self.buf.clear();
        Ok(Box::new(&mut self.buf))
    }
}
