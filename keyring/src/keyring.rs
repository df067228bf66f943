use engine::HomomorphicEngine;
use serde::Deserialize;
use tracing::debug;

use crate::codec::blob;
use crate::store::KeyStore;
use crate::{KeyringError, KeyringResult, Stage};

pub const SECRET_KEY_ENTRY: &str = "SECRET_KEY";
pub const CLOUD_KEY_ENTRY: &str = "CLOUD_KEY";

/// Store entry holding a ciphertext labelled `label`.
pub fn ciphertext_entry(label: &str) -> String {
    format!("CIPHERTEXT_{}", label.to_ascii_uppercase())
}

/// Store entry names of the key pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyNames {
    #[serde(default = "default_secret")]
    pub secret: String,
    #[serde(default = "default_cloud")]
    pub cloud: String,
}

fn default_secret() -> String {
    SECRET_KEY_ENTRY.into()
}
fn default_cloud() -> String {
    CLOUD_KEY_ENTRY.into()
}

impl Default for KeyNames {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            cloud: default_cloud(),
        }
    }
}

/// Binds an engine to a key-material store.
///
/// Keys only exist in memory for the duration of a call; the store holds
/// the sole durable copy, as text.
pub struct Keyring<E, S> {
    pub(crate) engine: E,
    pub(crate) store: S,
    pub(crate) names: KeyNames,
}

impl<E: HomomorphicEngine, S: KeyStore> Keyring<E, S> {
    pub fn new(engine: E, store: S) -> Self {
        Self::with_names(engine, store, KeyNames::default())
    }

    pub fn with_names(engine: E, store: S, names: KeyNames) -> Self {
        Self { engine, store, names }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Fetches and base64-decodes the entry `name`.
    pub(crate) fn load_blob(&self, name: &str) -> KeyringResult<Vec<u8>> {
        let text = self.store.get(name).map_err(KeyringError::lookup)?;
        let bytes = blob::decode(&text).map_err(|e| KeyringError::codec(name, e))?;
        debug!(entry = name, bytes = bytes.len(), "loaded key blob");
        Ok(bytes)
    }

    pub(crate) fn load_secret_key(&self, name: &str) -> KeyringResult<E::SecretKey> {
        let bytes = self.load_blob(name)?;
        self.engine
            .deserialize_secret_key(&bytes)
            .map_err(KeyringError::engine(Stage::KeyImport))
    }
}
