//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};

use super::Error;

/// A diagnostic wrapper for write errors compatible with miette.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct WriteDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(e: &Error) -> Option<String> {
    let help = match e {
        Error::InvalidArgument(_) => "Pass a non-empty destination filename",
        Error::PathConflict { .. } => "Remove the existing entry or choose another path",
        Error::Io { .. } | Error::Write(_) => {
            "Check permissions, free space and that the parent directory exists"
        }
        Error::InvalidBinmode { .. } => {
            "Use a layer list such as 'raw', 'crlf' or 'encoding(UTF-8)'"
        }
        Error::NotUtf8 { .. } => "Use write_bytes for non-UTF-8 layers",
        Error::Delegate(_) | Error::Config(_) => return None,
    };
    Some(help.into())
}

impl From<Error> for WriteDiagnostic {
    fn from(e: Error) -> Self {
        WriteDiagnostic {
            message: e.to_string(),
            help: help_for(&e),
            source: Some(Box::new(e)),
            severity: Severity::Error,
        }
    }
}

impl From<Error> for miette::Report {
    fn from(e: Error) -> Self {
        miette::Report::new(WriteDiagnostic::from(e))
    }
}
