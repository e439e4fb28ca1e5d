//! Loading writer configuration from text.

#[cfg(any(feature = "json", feature = "yaml"))]
use super::WriterConfig;
#[cfg(any(feature = "json", feature = "yaml"))]
use crate::error::{Error, Result};

#[cfg(feature = "json")]
impl WriterConfig {
    /// Parse a configuration from JSON, e.g. `{"binmode": "raw"}`.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Config(Box::new(e)))
    }
}

#[cfg(feature = "yaml")]
impl WriterConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| Error::Config(Box::new(e)))
    }
}
