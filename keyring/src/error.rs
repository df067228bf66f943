//! Error types for key lifecycle operations

use std::fmt;

use engine::EngineError;

use crate::codec::CodecError;
use crate::store::StoreError;

/// Step of an operation at which the engine failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    KeyGeneration,
    KeyExport,
    KeyImport,
    Encryption,
    CiphertextImport,
    Decryption,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::KeyGeneration => "key generation",
            Stage::KeyExport => "key export",
            Stage::KeyImport => "key import",
            Stage::Encryption => "encryption",
            Stage::CiphertextImport => "ciphertext import",
            Stage::Decryption => "decryption",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KeyringError {
    #[error("engine failed during {stage}: {source}")]
    Engine {
        stage: Stage,
        #[source]
        source: EngineError,
    },

    #[error("entry {name} is not a valid key encoding: {source}")]
    Decoding {
        name: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("ciphertext has {actual} samples, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("ciphertext sample {index} is not an integer: {token:?}")]
    MalformedToken { index: usize, token: String },

    #[error("no key material stored under {0}")]
    KeyNotFound(String),

    #[error("key pair parameters disagree: secret {secret}, cloud {cloud}")]
    ParameterMismatch { secret: String, cloud: String },

    #[error("invalid bit {0:?}: expected 0 or 1")]
    InvalidBit(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl KeyringError {
    pub(crate) fn engine(stage: Stage) -> impl FnOnce(EngineError) -> Self {
        move |source| Self::Engine { stage, source }
    }

    /// Attaches the entry name to a codec failure.
    pub(crate) fn codec(name: &str, err: CodecError) -> Self {
        match err {
            CodecError::Decoding(source) => Self::Decoding {
                name: name.to_string(),
                source,
            },
            CodecError::LengthMismatch { expected, actual } => Self::LengthMismatch { expected, actual },
            CodecError::MalformedToken { index, token } => Self::MalformedToken { index, token },
        }
    }

    /// Maps a missing store entry to [`KeyringError::KeyNotFound`].
    pub(crate) fn lookup(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(name) => Self::KeyNotFound(name),
            other => Self::Store(other),
        }
    }
}

pub type KeyringResult<T> = Result<T, KeyringError>;
