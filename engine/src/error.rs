//! Error types for engine operations

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unsupported security level {0}: supported range is 1..=128")]
    UnsupportedSecurityLevel(u32),

    #[error("seed has {len} words, at most {max} are supported")]
    SeedTooLong { len: usize, max: usize },

    #[error("invalid parameter set: {0}")]
    InvalidParameters(String),

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid key data: {0}")]
    InvalidData(String),

    #[error("key stream I/O: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
