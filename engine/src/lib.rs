//! Single-bit symmetric LWE engine over the 32-bit torus.
//!
//! [`HomomorphicEngine`] is the capability the key lifecycle code is written
//! against; [`LweBitEngine`] is the implementation shipped with it.

pub mod api;
pub mod ciphertext;
pub mod cloud;
pub mod decryption;
pub mod encryption;
pub mod engine;
pub mod error;
pub mod params;
pub mod secret;
pub mod serialization;
#[cfg(test)]
mod tests;

pub use api::HomomorphicEngine;
pub use ciphertext::LweCiphertext;
pub use cloud::CloudKey;
pub use engine::LweBitEngine;
pub use error::{EngineError, EngineResult};
pub use params::ParameterSet;
pub use secret::LweSecret;
pub use serialization::{ReaderFrom, WriterTo};

pub(crate) const SIX_SIGMA: f64 = 6.0;

/// 2^32, the number of points of the discretized torus.
pub(crate) const TORUS_SCALE: f64 = 4294967296.0;

/// Torus encoding of a bit: `+1/8` for `true`, `-1/8` for `false`.
#[inline(always)]
pub fn encode_bit(bit: bool) -> i32 {
    if bit { 1 << 29 } else { -(1 << 29) }
}
