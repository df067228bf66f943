#![allow(dead_code)]

use engine::{CloudKey, EngineError, EngineResult, HomomorphicEngine, LweBitEngine, LweCiphertext, LweSecret, ParameterSet};
use keyring::{KeyStore, OverwritePolicy, StoreError, StoreResult};

pub const SEED: [u32; 3] = [123, 456, 789];

pub fn test_engine() -> LweBitEngine {
    LweBitEngine::new([0u8; 32])
}

/// Store wrapper whose `fail_on`-th call to `set` (1-based) fails.
pub struct FailingStore<S> {
    pub inner: S,
    pub fail_on: usize,
    pub sets: usize,
}

impl<S: KeyStore> FailingStore<S> {
    pub fn new(inner: S, fail_on: usize) -> Self {
        Self { inner, fail_on, sets: 0 }
    }
}

impl<S: KeyStore> KeyStore for FailingStore<S> {
    fn overwrite_policy(&self) -> OverwritePolicy {
        self.inner.overwrite_policy()
    }

    fn exists(&self, name: &str) -> StoreResult<bool> {
        self.inner.exists(name)
    }

    fn get(&self, name: &str) -> StoreResult<String> {
        self.inner.get(name)
    }

    fn set(&mut self, name: &str, value: &str) -> StoreResult<()> {
        self.sets += 1;
        if self.sets == self.fail_on {
            return Err(StoreError::Io(std::io::Error::other("injected write failure")));
        }
        self.inner.set(name, value)
    }

    fn remove(&mut self, name: &str) -> StoreResult<()> {
        self.inner.remove(name)
    }
}

/// Engine whose key generation always fails.
pub struct BrokenKeygen(pub LweBitEngine);

impl HomomorphicEngine for BrokenKeygen {
    type SecretKey = LweSecret;
    type CloudKey = CloudKey;
    type Ciphertext = LweCiphertext;

    fn generate_key_pair(&mut self, _security_level: u32, _seed: &[u32]) -> EngineResult<(LweSecret, CloudKey)> {
        Err(EngineError::InvalidParameters("injected generation failure".into()))
    }

    fn encrypt_bit(&mut self, bit: bool, sk: &LweSecret) -> EngineResult<LweCiphertext> {
        self.0.encrypt_bit(bit, sk)
    }

    fn decrypt_bit(&self, ct: &LweCiphertext, sk: &LweSecret) -> EngineResult<bool> {
        self.0.decrypt_bit(ct, sk)
    }

    fn serialize_secret_key(&self, sk: &LweSecret) -> EngineResult<Vec<u8>> {
        self.0.serialize_secret_key(sk)
    }

    fn serialize_cloud_key(&self, ck: &CloudKey) -> EngineResult<Vec<u8>> {
        self.0.serialize_cloud_key(ck)
    }

    fn deserialize_secret_key(&self, bytes: &[u8]) -> EngineResult<LweSecret> {
        self.0.deserialize_secret_key(bytes)
    }

    fn deserialize_cloud_key(&self, bytes: &[u8]) -> EngineResult<CloudKey> {
        self.0.deserialize_cloud_key(bytes)
    }

    fn secret_key_params(&self, sk: &LweSecret) -> ParameterSet {
        self.0.secret_key_params(sk)
    }

    fn cloud_key_params(&self, ck: &CloudKey) -> ParameterSet {
        self.0.cloud_key_params(ck)
    }

    fn ciphertext_len(&self, sk: &LweSecret) -> usize {
        self.0.ciphertext_len(sk)
    }

    fn ciphertext_samples<'a>(&self, ct: &'a LweCiphertext) -> &'a [i32] {
        self.0.ciphertext_samples(ct)
    }

    fn ciphertext_from_samples(&self, samples: Vec<i32>, sk: &LweSecret) -> EngineResult<LweCiphertext> {
        self.0.ciphertext_from_samples(samples, sk)
    }
}
