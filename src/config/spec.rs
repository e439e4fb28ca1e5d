//! Writer configuration and per-call options.

use serde::{Deserialize, Serialize};

use crate::layer::Binmode;

/// Name of the handle-writing operation when none is configured.
pub const DEFAULT_METHOD: &str = "write_handle";

/// Generation-time configuration for a set of writers.
///
/// Every writer built from a config closes over a copy of it; changing a
/// config afterwards never affects writers already built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Name of the handle-writing operation
    #[serde(default = "default_method")]
    pub method: String,
    /// Default binmode, e.g. "encoding(UTF-8)" or "raw"
    #[serde(default)]
    pub binmode: Binmode,
}

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            binmode: Binmode::default(),
        }
    }
}

impl WriterConfig {
    /// Create a configuration with the default method name and binmode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the method name.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the default binmode.
    pub fn with_binmode(mut self, binmode: Binmode) -> Self {
        self.binmode = binmode;
        self
    }
}

/// Per-call options accepted by the file writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Binmode for this call only
    #[serde(default)]
    pub binmode: Option<Binmode>,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the binmode for this call.
    pub fn with_binmode(mut self, binmode: Binmode) -> Self {
        self.binmode = Some(binmode);
        self
    }

    /// The binmode to use, falling back to `default`.
    pub fn resolve<'a>(&'a self, default: &'a Binmode) -> &'a Binmode {
        self.binmode.as_ref().unwrap_or(default)
    }
}
