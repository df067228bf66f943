use engine::{HomomorphicEngine, ParameterSet};
use tracing::{debug, error, info, warn};

use crate::codec::blob;
use crate::store::KeyStore;
use crate::{KeyNames, Keyring, KeyringError, KeyringResult, Stage};

/// Summary of a stored key pair.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyPairInfo {
    pub names: KeyNames,
    pub params: ParameterSet,
    pub secret_key_bytes: usize,
    pub cloud_key_bytes: usize,
    pub ciphertext_len: usize,
}

impl<E: HomomorphicEngine, S: KeyStore> Keyring<E, S> {
    pub fn has_keys(&self) -> KeyringResult<bool> {
        Ok(self.store.exists(&self.names.secret)? && self.store.exists(&self.names.cloud)?)
    }

    /// Generates and stores a key pair unless both entries already exist.
    ///
    /// Existing entries are never regenerated. If only one entry exists the
    /// pair is regenerated and written in full, subject to the store's
    /// overwrite policy. Either both entries are written or, on failure,
    /// neither entry written by this call is left behind.
    pub fn ensure_keys(&mut self, security_level: u32, seed: &[u32]) -> KeyringResult<KeyNames> {
        let secret_present = self.store.exists(&self.names.secret)?;
        let cloud_present = self.store.exists(&self.names.cloud)?;

        if secret_present && cloud_present {
            info!(
                secret = %self.names.secret,
                cloud = %self.names.cloud,
                "key pair already stored, skipping generation"
            );
            return Ok(self.names.clone());
        }
        if secret_present || cloud_present {
            warn!(secret_present, cloud_present, "incomplete key pair in store, regenerating");
        }

        // The engine-owned keys are dropped at the end of this block, on
        // success and on every early return.
        let (secret_text, cloud_text) = {
            let (sk, ck) = self
                .engine
                .generate_key_pair(security_level, seed)
                .map_err(KeyringError::engine(Stage::KeyGeneration))?;

            let secret_bytes = self
                .engine
                .serialize_secret_key(&sk)
                .map_err(KeyringError::engine(Stage::KeyExport))?;
            let cloud_bytes = self
                .engine
                .serialize_cloud_key(&ck)
                .map_err(KeyringError::engine(Stage::KeyExport))?;

            (blob::encode(&secret_bytes), blob::encode(&cloud_bytes))
        };

        self.store_pair(&secret_text, &cloud_text)?;

        info!(
            security_level,
            secret = %self.names.secret,
            cloud = %self.names.cloud,
            secret_len = secret_text.len(),
            cloud_len = cloud_text.len(),
            "generated and stored key pair"
        );
        Ok(self.names.clone())
    }

    fn store_pair(&mut self, secret_text: &str, cloud_text: &str) -> KeyringResult<()> {
        self.store.set(&self.names.secret, secret_text)?;
        debug!(entry = %self.names.secret, "stored secret key");

        if let Err(e) = self.store.set(&self.names.cloud, cloud_text) {
            warn!(entry = %self.names.cloud, error = %e, "storing cloud key failed, rolling back secret key");
            if let Err(rollback) = self.store.remove(&self.names.secret) {
                error!(entry = %self.names.secret, error = %rollback, "rollback of secret key failed");
            }
            return Err(e.into());
        }
        debug!(entry = %self.names.cloud, "stored cloud key");
        Ok(())
    }

    /// Imports both stored keys and checks that their parameters agree.
    pub fn inspect(&self) -> KeyringResult<KeyPairInfo> {
        let secret_bytes = self.load_blob(&self.names.secret)?;
        let cloud_bytes = self.load_blob(&self.names.cloud)?;

        let sk = self
            .engine
            .deserialize_secret_key(&secret_bytes)
            .map_err(KeyringError::engine(Stage::KeyImport))?;
        let ck = self
            .engine
            .deserialize_cloud_key(&cloud_bytes)
            .map_err(KeyringError::engine(Stage::KeyImport))?;

        let params = self.engine.secret_key_params(&sk);
        let cloud_params = self.engine.cloud_key_params(&ck);
        if params != cloud_params {
            return Err(KeyringError::ParameterMismatch {
                secret: format!("{params:?}"),
                cloud: format!("{cloud_params:?}"),
            });
        }

        Ok(KeyPairInfo {
            names: self.names.clone(),
            params,
            secret_key_bytes: secret_bytes.len(),
            cloud_key_bytes: cloud_bytes.len(),
            ciphertext_len: self.engine.ciphertext_len(&sk),
        })
    }
}
