//! Text form of ciphertexts: signed decimal samples joined by `,`.

use itertools::Itertools;

use super::{CodecError, CodecResult};

pub const SEPARATOR: char = ',';

pub fn encode(values: &[i32]) -> String {
    values.iter().join(",")
}

/// Decodes `text` into exactly `expected_length` samples.
///
/// The token count is checked before any token is parsed.
pub fn decode(text: &str, expected_length: usize) -> CodecResult<Vec<i32>> {
    let tokens: Vec<&str> = if text.is_empty() {
        Vec::new()
    } else {
        text.split(SEPARATOR).collect()
    };

    if tokens.len() != expected_length {
        return Err(CodecError::LengthMismatch {
            expected: expected_length,
            actual: tokens.len(),
        });
    }

    tokens
        .into_iter()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<i32>().map_err(|_| CodecError::MalformedToken {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}
