//! Text-to-octet conversion for the active text layer.

use std::borrow::Cow;

use encoding_rs::{Encoder, EncoderResult};
use tracing::warn;

use super::{Binmode, TextLayer};

/// Stateful encoder for one handle.
///
/// Holds the `encoding_rs` encoder so that stateful encodings (ISO-2022-JP)
/// keep their shift state across `print` calls until the handle is closed.
pub(crate) struct TextEncoder {
    text: TextLayer,
    crlf: bool,
    encoder: Option<Encoder>,
}

impl std::fmt::Debug for TextEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEncoder")
            .field("text", &self.text.name())
            .field("crlf", &self.crlf)
            .finish()
    }
}

impl TextEncoder {
    pub(crate) fn new(binmode: &Binmode) -> Self {
        let text = binmode.text_layer();
        let encoder = match text {
            TextLayer::Encoded(enc) => Some(enc.new_encoder()),
            _ => None,
        };
        Self {
            text,
            crlf: binmode.crlf(),
            encoder,
        }
    }

    /// Encode `text` into octets, appending them to `out`.
    pub(crate) fn encode_text(&mut self, text: &str, out: &mut Vec<u8>) {
        let translated;
        let text = if self.crlf && text.contains('\n') {
            translated = text.replace('\n', "\r\n");
            translated.as_str()
        } else {
            text
        };

        match self.text {
            TextLayer::Utf8 => out.extend_from_slice(text.as_bytes()),
            TextLayer::Octets => encode_octets(text, out),
            TextLayer::Latin1 => encode_latin1(text, out),
            TextLayer::Encoded(_) => {
                if let Some(encoder) = self.encoder.as_mut() {
                    encode_with(encoder, text, out, false);
                }
            }
        }
    }

    /// Flush any pending encoder state (e.g. the ISO-2022-JP return to ASCII).
    pub(crate) fn finish(&mut self, out: &mut Vec<u8>) {
        if let Some(encoder) = self.encoder.as_mut() {
            encode_with(encoder, "", out, true);
        }
    }
}

/// Apply CRLF translation to octets written below the text layer.
pub(crate) fn translate_octets(buf: &[u8], crlf: bool) -> Cow<'_, [u8]> {
    if !crlf || !buf.contains(&b'\n') {
        return Cow::Borrowed(buf);
    }
    let mut out = Vec::with_capacity(buf.len() + 8);
    for &b in buf {
        if b == b'\n' {
            out.push(b'\r');
        }
        out.push(b);
    }
    Cow::Owned(out)
}

fn encode_octets(text: &str, out: &mut Vec<u8>) {
    if let Some(wide) = text.chars().find(|c| u32::from(*c) > 0xFF) {
        warn!(
            character = %format!("U+{:04X}", u32::from(wide)),
            "Wide character written to an octet handle, writing UTF-8"
        );
        out.extend_from_slice(text.as_bytes());
        return;
    }
    // Every char fits in one octet, checked above.
    out.extend(text.chars().map(|c| u32::from(c) as u8));
}

fn encode_latin1(text: &str, out: &mut Vec<u8>) {
    for c in text.chars() {
        let code = u32::from(c);
        if code <= 0xFF {
            out.push(code as u8);
        } else {
            warn!(
                character = %format!("U+{code:04X}"),
                encoding = TextLayer::Latin1.name(),
                "Character does not map to the handle encoding, escaping"
            );
            out.extend_from_slice(format!("\\x{{{code:04X}}}").as_bytes());
        }
    }
}

fn encode_with(encoder: &mut Encoder, text: &str, out: &mut Vec<u8>, last: bool) {
    let mut rest = text;
    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(rest.len())
            .unwrap_or(rest.len() * 4 + 16);
        out.reserve(needed);

        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(rest, out, last);
        rest = &rest[read..];

        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(c) => {
                warn!(
                    character = %format!("U+{:04X}", u32::from(c)),
                    encoding = encoder.encoding().name(),
                    "Character does not map to the handle encoding, escaping"
                );
                let escape = format!("\\x{{{:04X}}}", u32::from(c));
                encode_with(encoder, &escape, out, false);
            }
        }
    }
}
