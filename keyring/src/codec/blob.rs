//! Binary-safe text form of exported keys: standard padded base64.
//!
//! The whole export stream is encoded regardless of length or content, so
//! embedded NUL bytes and keys of any size survive a store round trip.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use super::CodecResult;

pub fn encode(blob: &[u8]) -> String {
    BASE64.encode(blob)
}

/// Strict inverse of [`encode`]: no whitespace, no missing padding.
pub fn decode(text: &str) -> CodecResult<Vec<u8>> {
    Ok(BASE64.decode(text)?)
}
