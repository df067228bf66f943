use crate::{EngineResult, ParameterSet};

/// Capability interface of a single-bit homomorphic engine.
///
/// Keys and ciphertexts are owned values: dropping them releases them.
/// Callers only ever see keys as opaque byte streams through the
/// `serialize_*`/`deserialize_*` pairs.
pub trait HomomorphicEngine {
    type SecretKey;
    type CloudKey;
    type Ciphertext;

    /// Builds a key pair for `security_level` bits, deterministically from `seed`.
    fn generate_key_pair(
        &mut self,
        security_level: u32,
        seed: &[u32],
    ) -> EngineResult<(Self::SecretKey, Self::CloudKey)>;

    fn encrypt_bit(&mut self, bit: bool, sk: &Self::SecretKey) -> EngineResult<Self::Ciphertext>;

    fn decrypt_bit(&self, ct: &Self::Ciphertext, sk: &Self::SecretKey) -> EngineResult<bool>;

    fn serialize_secret_key(&self, sk: &Self::SecretKey) -> EngineResult<Vec<u8>>;

    fn serialize_cloud_key(&self, ck: &Self::CloudKey) -> EngineResult<Vec<u8>>;

    fn deserialize_secret_key(&self, bytes: &[u8]) -> EngineResult<Self::SecretKey>;

    fn deserialize_cloud_key(&self, bytes: &[u8]) -> EngineResult<Self::CloudKey>;

    fn secret_key_params(&self, sk: &Self::SecretKey) -> ParameterSet;

    fn cloud_key_params(&self, ck: &Self::CloudKey) -> ParameterSet;

    /// Number of samples in a ciphertext produced under `sk`.
    fn ciphertext_len(&self, sk: &Self::SecretKey) -> usize;

    fn ciphertext_samples<'a>(&self, ct: &'a Self::Ciphertext) -> &'a [i32];

    /// Rebuilds a ciphertext from its samples, checking them against `sk`.
    fn ciphertext_from_samples(&self, samples: Vec<i32>, sk: &Self::SecretKey) -> EngineResult<Self::Ciphertext>;
}
