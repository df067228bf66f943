//! Key and ciphertext lifecycle for single-bit homomorphic encryption.
//!
//! A [`Keyring`] ties a [`HomomorphicEngine`] to a [`KeyStore`]:
//!
//! - [`Keyring::ensure_keys`] generates a secret/cloud key pair once and
//!   stores both as base64 text, or leaves an existing pair untouched.
//! - [`Keyring::encrypt_bit`] / [`Keyring::decrypt_bit`] load the stored
//!   secret key and move single bits through the engine, with ciphertexts
//!   carried as comma-separated decimal samples.
//!
//! ## Store backends
//!
//! | Backend       | Overwrite policy | Use case              |
//! |---------------|------------------|-----------------------|
//! | `MemoryStore` | overwrite        | tests, one-shot runs  |
//! | `EnvStore`    | overwrite        | process environment   |
//! | `DotenvStore` | refuse           | persisted `.env` file |
//!
//! ## Example
//!
//! ```rust,ignore
//! use engine::LweBitEngine;
//! use keyring::{Bit, Keyring, MemoryStore};
//!
//! let mut keyring = Keyring::new(LweBitEngine::default(), MemoryStore::new());
//! let names = keyring.ensure_keys(110, &[123, 456, 789])?;
//! let n = keyring.ciphertext_len(&names.secret)?;
//! let token = keyring.encrypt_bit(Bit::One, &names.secret)?;
//! assert_eq!(keyring.decrypt_bit(&token, &names.secret, n)?, Bit::One);
//! ```

mod bit;
pub mod codec;
pub mod config;
mod crypt;
mod error;
mod keyring;
mod lifecycle;
pub mod store;

pub use bit::Bit;
pub use config::{KeyringConfig, StoreBackend, StoreConfig};
pub use error::{KeyringError, KeyringResult, Stage};
pub use keyring::{CLOUD_KEY_ENTRY, KeyNames, Keyring, SECRET_KEY_ENTRY, ciphertext_entry};
pub use lifecycle::KeyPairInfo;
pub use store::{DotenvStore, EnvStore, KeyStore, MemoryStore, OverwritePolicy, StoreError, StoreResult};

pub use engine::HomomorphicEngine;
