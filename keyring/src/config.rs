use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;

use crate::keyring::KeyNames;
use crate::store::{DotenvStore, EnvStore, KeyStore, MemoryStore};

pub const DEFAULT_CONFIG_FILE: &str = "tfhe-keyring.toml";
pub const ENV_PREFIX: &str = "TFHE_KEYRING_";

#[derive(Debug, Deserialize, Clone)]
pub struct KeyringConfig {
    /// Minimum security level, in bits, passed to key generation.
    #[serde(default = "default_security_level")]
    pub security_level: u32,

    #[serde(default = "default_seed")]
    pub seed: Vec<u32>,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub names: KeyNames,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_env_prefix")]
    pub env_prefix: String,
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Env,
    #[default]
    Dotenv,
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            env_prefix: default_env_prefix(),
            path: default_path(),
        }
    }
}

impl Default for KeyringConfig {
    fn default() -> Self {
        Self {
            security_level: default_security_level(),
            seed: default_seed(),
            store: StoreConfig::default(),
            names: KeyNames::default(),
        }
    }
}

fn default_security_level() -> u32 {
    110
}
fn default_seed() -> Vec<u32> {
    vec![123, 456, 789]
}
fn default_env_prefix() -> String {
    "TFHE_".into()
}
fn default_path() -> PathBuf {
    ".env".into()
}

impl KeyringConfig {
    /// Loads `tfhe-keyring.toml` from the working directory, then
    /// `TFHE_KEYRING_*` variables (`__` separates nested keys).
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }

    pub fn open_store(&self) -> Box<dyn KeyStore> {
        match self.store.backend {
            StoreBackend::Env => Box::new(EnvStore::new(self.store.env_prefix.clone())),
            StoreBackend::Dotenv => Box::new(DotenvStore::new(&self.store.path)),
            StoreBackend::Memory => Box::new(MemoryStore::new()),
        }
    }
}
