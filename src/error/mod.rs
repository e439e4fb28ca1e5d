//! Error types for linewise write operations.
//!
//! This module provides:
//! - `Stage`: Indicates where an I/O error occurred while driving a handle
//! - `Error`: Every failure a generated write operation can surface
//! - `Result`: Convenience alias used across the crate

use std::fmt;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the output stream
    Open,
    Write,
    /// Error while flushing or releasing the output stream
    Close,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Write => write!(f, "Write"),
            Stage::Close => write!(f, "Close"),
        }
    }
}

/// Errors raised by generated write operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The target path exists but is not a regular file
    #[error("'{}' is not a plain file", .path.display())]
    PathConflict { path: PathBuf },

    /// Opening or closing the stream failed
    #[error("[{stage}] {target}: {source}")]
    Io {
        stage: Stage,
        /// Identifier of the target (file path, "<string>" for the in-memory buffer)
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the handle failed inside the handle-writing operation
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    /// The binmode string is not a recognised layer list
    #[error("Invalid binmode '{binmode}': {reason}")]
    InvalidBinmode { binmode: String, reason: String },

    /// The configured layer produced octets that are not valid UTF-8
    #[error("Output written with binmode '{binmode}' is not valid UTF-8")]
    NotUtf8 {
        binmode: String,
        #[source]
        source: FromUtf8Error,
    },

    /// Domain error returned by the handle-writing operation
    #[error("Handle writer failed: {0}")]
    Delegate(Box<dyn std::error::Error + Send + Sync>),

    /// Configuration text could not be parsed
    #[error("Config error: {0}")]
    Config(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an arbitrary error returned by a handle-writing operation.
    pub fn delegate(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Delegate(error.into())
    }

    pub(crate) fn io(stage: Stage, target: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            stage,
            target: target.into(),
            source,
        }
    }

    pub(crate) fn invalid_binmode(binmode: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidBinmode {
            binmode: binmode.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from the underlying platform I/O layer.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::Write(_))
    }

    /// The stage at which an I/O error occurred, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Io { stage, .. } => Some(*stage),
            Error::Write(_) => Some(Stage::Write),
            _ => None,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
