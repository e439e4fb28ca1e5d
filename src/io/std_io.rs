//! Filesystem output target.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::OutputTarget;
use crate::error::{Error, Result};

/// Output target for writing to files.
#[derive(Debug, Clone)]
pub struct FileOutput {
    id: String,
    path: PathBuf,
}

impl FileOutput {
    /// Create a new file output target.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Create a file output target after validating the destination.
    ///
    /// Fails with `InvalidArgument` for an empty path and with `PathConflict`
    /// when something other than a regular file already lives at `path`.
    /// Symlinks are followed. Nothing is created or modified.
    pub fn checked(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("no filename provided".into()));
        }

        if let Ok(meta) = std::fs::metadata(path) {
            if !meta.is_file() {
                return Err(Error::PathConflict {
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(Self::new(path.to_path_buf()))
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl OutputTarget for FileOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&mut self) -> io::Result<Box<dyn Write + Send + '_>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }
}
