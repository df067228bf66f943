use engine::LweBitEngine;
use keyring::{KeyStore, Keyring, KeyringConfig};

pub mod decrypt;
pub mod encrypt;
pub mod generate;
pub mod status;

pub struct Context {
    pub config: KeyringConfig,
}

pub type CliKeyring = Keyring<LweBitEngine, Box<dyn KeyStore>>;

impl Context {
    pub fn keyring(&self) -> CliKeyring {
        Keyring::with_names(
            LweBitEngine::from_entropy(),
            self.config.open_store(),
            self.config.names.clone(),
        )
    }
}
