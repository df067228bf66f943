//! Text encodings for key blobs and ciphertexts.
//!
//! Both codecs are exact: [`blob::decode`] inverts [`blob::encode`] for any
//! byte string, and [`ciphertext::decode`] inverts [`ciphertext::encode`]
//! for any `i32` sequence given its length.

pub mod blob;
pub mod ciphertext;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Decoding(#[from] base64::DecodeError),

    #[error("expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("sample {index} is not an integer: {token:?}")]
    MalformedToken { index: usize, token: String },
}

pub type CodecResult<T> = Result<T, CodecError>;
