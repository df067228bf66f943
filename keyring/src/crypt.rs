use engine::HomomorphicEngine;
use tracing::debug;

use crate::codec::ciphertext;
use crate::store::KeyStore;
use crate::{Bit, Keyring, KeyringError, KeyringResult, Stage};

impl<E: HomomorphicEngine, S: KeyStore> Keyring<E, S> {
    /// Number of samples a ciphertext under the stored key `secret_name` has.
    pub fn ciphertext_len(&self, secret_name: &str) -> KeyringResult<usize> {
        let sk = self.load_secret_key(secret_name)?;
        Ok(self.engine.ciphertext_len(&sk))
    }

    /// Encrypts one bit under the stored secret key and returns its text form.
    pub fn encrypt_bit(&mut self, bit: Bit, secret_name: &str) -> KeyringResult<String> {
        let sk = self.load_secret_key(secret_name)?;
        let ct = self
            .engine
            .encrypt_bit(bit.into(), &sk)
            .map_err(KeyringError::engine(Stage::Encryption))?;
        let token = ciphertext::encode(self.engine.ciphertext_samples(&ct));
        debug!(key = secret_name, samples = self.engine.ciphertext_len(&sk), "encrypted bit");
        Ok(token)
    }

    /// Decrypts a serialized ciphertext of exactly `expected_length` samples.
    pub fn decrypt_bit(&self, serialized: &str, secret_name: &str, expected_length: usize) -> KeyringResult<Bit> {
        let sk = self.load_secret_key(secret_name)?;
        let bit = self.decrypt_with(&sk, serialized, expected_length)?;
        debug!(key = secret_name, "decrypted bit");
        Ok(bit)
    }

    fn decrypt_with(&self, sk: &E::SecretKey, serialized: &str, expected_length: usize) -> KeyringResult<Bit> {
        let samples = ciphertext::decode(serialized, expected_length).map_err(|e| KeyringError::codec("ciphertext", e))?;
        let ct = self
            .engine
            .ciphertext_from_samples(samples, sk)
            .map_err(KeyringError::engine(Stage::CiphertextImport))?;
        let bit = self
            .engine
            .decrypt_bit(&ct, sk)
            .map_err(KeyringError::engine(Stage::Decryption))?;
        Ok(bit.into())
    }

    /// Encrypts one bit and stores the ciphertext under `ciphertext_name`.
    pub fn encrypt_bit_into(&mut self, bit: Bit, secret_name: &str, ciphertext_name: &str) -> KeyringResult<String> {
        let token = self.encrypt_bit(bit, secret_name)?;
        self.store.set(ciphertext_name, &token)?;
        debug!(entry = ciphertext_name, "stored ciphertext");
        Ok(token)
    }

    /// Decrypts the ciphertext stored under `ciphertext_name`, with the
    /// expected length taken from the key's parameters.
    pub fn decrypt_stored_bit(&self, ciphertext_name: &str, secret_name: &str) -> KeyringResult<Bit> {
        let token = self.store.get(ciphertext_name).map_err(KeyringError::lookup)?;
        let sk = self.load_secret_key(secret_name)?;
        let expected_length = self.engine.ciphertext_len(&sk);
        let bit = self.decrypt_with(&sk, &token, expected_length)?;
        debug!(key = secret_name, entry = ciphertext_name, "decrypted stored bit");
        Ok(bit)
    }
}
