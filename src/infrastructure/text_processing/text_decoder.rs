use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};

use super::ExtractionError;

/// Decode raw bytes with an ordered list of candidate encodings; the first
/// one that decodes without error wins.
///
/// The order is observable behavior and must not change: Windows-1252 (the
/// WHATWG decoder behind both the latin-1 and cp1252 labels) accepts every
/// byte sequence, so placing it before UTF-8 or UTF-16 would mask correct
/// encodings. Best-effort heuristic, not a correctness guarantee.
pub fn decode_text(content: &[u8]) -> Result<String, ExtractionError> {
    if let Some(text) = strict_decode(UTF_8, content) {
        return Ok(text);
    }

    if let Some(text) = decode_utf16(content) {
        return Ok(text);
    }

    if let Some(text) = strict_decode(WINDOWS_1252, content) {
        return Ok(text);
    }

    Err(ExtractionError::UndecodableText)
}

fn strict_decode(encoding: &'static Encoding, content: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(content)
        .map(|cow| cow.into_owned())
}

/// UTF-16 with BOM sniffing; without a BOM the byte order defaults to
/// little-endian.
fn decode_utf16(content: &[u8]) -> Option<String> {
    let (encoding, payload) = match content {
        [0xFE, 0xFF, rest @ ..] => (UTF_16BE, rest),
        [0xFF, 0xFE, rest @ ..] => (UTF_16LE, rest),
        _ => (UTF_16LE, content),
    };

    strict_decode(encoding, payload)
}
