//! Binmode strings and the text layers they select.
//!
//! A binmode is a colon-separated list of layers, e.g. `encoding(UTF-8)`,
//! `:raw`, `raw:crlf` or `encoding(iso-8859-1)`. One leading colon is
//! ignored. Layers are applied left to right, so `raw:utf8` ends up with a
//! UTF-8 text layer.

use std::fmt;
use std::str::FromStr;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

mod encode;

pub(crate) use encode::{TextEncoder, translate_octets};

/// The binmode applied when none is configured.
pub const DEFAULT_BINMODE: &str = "encoding(UTF-8)";

/// How text written to a handle is turned into octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLayer {
    /// Each character is written as a single octet
    Octets,
    /// UTF-8
    Utf8,
    /// ISO-8859-1: code points up to U+00FF as one octet, wider ones escaped
    Latin1,
    /// A named encoding other than UTF-8
    Encoded(&'static Encoding),
}

impl TextLayer {
    pub fn name(&self) -> &'static str {
        match self {
            TextLayer::Octets => "octets",
            TextLayer::Utf8 => "UTF-8",
            TextLayer::Latin1 => "ISO-8859-1",
            TextLayer::Encoded(enc) => enc.name(),
        }
    }
}

/// A parsed binmode: a text layer plus optional CRLF translation.
///
/// Two binmodes are equal when they encode the same way, whatever their
/// spelling: `encoding(utf-8)` equals `encoding(UTF-8)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Binmode {
    spec: String,
    text: TextLayer,
    crlf: bool,
}

impl Binmode {
    /// Parse a binmode string such as `"encoding(UTF-8)"` or `":raw"`.
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        let normalized = trimmed.strip_prefix(':').unwrap_or(trimmed);

        let mut text = TextLayer::Octets;
        let mut crlf = false;
        let mut seen = false;

        for layer in normalized.split(':').map(str::trim) {
            if layer.is_empty() {
                continue;
            }
            seen = true;

            match layer {
                "raw" => {
                    text = TextLayer::Octets;
                    crlf = false;
                }
                "bytes" => text = TextLayer::Octets,
                "unix" | "perlio" | "stdio" => {}
                "crlf" => crlf = true,
                "utf8" => text = TextLayer::Utf8,
                other => text = parse_encoding_layer(spec, other)?,
            }
        }

        if !seen {
            return Err(Error::invalid_binmode(spec, "no layers given"));
        }

        Ok(Self {
            spec: normalized.to_string(),
            text,
            crlf,
        })
    }

    /// Octet layer with no translation (`raw`).
    pub fn raw() -> Self {
        Self {
            spec: "raw".into(),
            text: TextLayer::Octets,
            crlf: false,
        }
    }

    /// UTF-8 text layer (`encoding(UTF-8)`).
    pub fn utf8() -> Self {
        Self {
            spec: DEFAULT_BINMODE.into(),
            text: TextLayer::Utf8,
            crlf: false,
        }
    }

    /// Text layer for a specific encoding.
    ///
    /// Encodings that `encoding_rs` cannot produce (UTF-16) fall back to
    /// their output encoding, UTF-8.
    pub fn encoding(encoding: &'static Encoding) -> Self {
        let output = encoding.output_encoding();
        let text = if output == encoding_rs::UTF_8 {
            TextLayer::Utf8
        } else {
            TextLayer::Encoded(output)
        };
        Self {
            spec: format!("encoding({})", output.name()),
            text,
            crlf: false,
        }
    }

    /// Enable `\n` to `\r\n` translation.
    pub fn with_crlf(mut self) -> Self {
        if !self.crlf {
            self.crlf = true;
            self.spec.push_str(":crlf");
        }
        self
    }

    /// The normalized layer string (without a leading colon).
    pub fn as_str(&self) -> &str {
        &self.spec
    }

    pub fn text_layer(&self) -> TextLayer {
        self.text
    }

    pub fn crlf(&self) -> bool {
        self.crlf
    }
}

/// Labels that select true ISO-8859-1 rather than the WHATWG mapping of
/// these labels to windows-1252.
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso88591",
    "latin1",
    "latin-1",
    "l1",
];

fn parse_encoding_layer(spec: &str, layer: &str) -> Result<TextLayer> {
    let label = layer
        .strip_prefix("encoding(")
        .and_then(|rest| rest.strip_suffix(')'))
        .map(str::trim)
        .ok_or_else(|| Error::invalid_binmode(spec, format!("unknown layer '{layer}'")))?;

    if label.is_empty() {
        return Err(Error::invalid_binmode(spec, "encoding layer without a name"));
    }

    if LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label)) {
        return Ok(TextLayer::Latin1);
    }

    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| Error::invalid_binmode(spec, format!("unknown encoding '{label}'")))?;

    if encoding == encoding_rs::UTF_8 {
        Ok(TextLayer::Utf8)
    } else if encoding.output_encoding() != encoding {
        Err(Error::invalid_binmode(
            spec,
            format!("encoding '{}' cannot be used for output", encoding.name()),
        ))
    } else {
        Ok(TextLayer::Encoded(encoding))
    }
}

impl PartialEq for Binmode {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.crlf == other.crlf
    }
}

impl Eq for Binmode {}

impl Default for Binmode {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Display for Binmode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

impl FromStr for Binmode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Binmode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Binmode> for String {
    fn from(b: Binmode) -> Self {
        b.spec
    }
}
