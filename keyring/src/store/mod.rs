//! Key-material stores: named text entries.
//!
//! Stores preserve values byte for byte and never interpret them. What
//! happens on `set` of an existing name is part of each backend's contract
//! and is reported by [`KeyStore::overwrite_policy`].

mod dotenv;
mod env;
mod memory;

pub use dotenv::DotenvStore;
pub use env::EnvStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("entry not found: {0}")]
    NotFound(String),

    #[error("entry {0} already exists and the store refuses to overwrite it")]
    AlreadyExists(String),

    #[error("invalid entry {name:?}: {reason}")]
    InvalidEntry { name: String, reason: &'static str },

    #[error("malformed line {line} in {path}")]
    Malformed { path: String, line: usize },

    #[error("entry {0} is not valid unicode")]
    NotUnicode(String),

    #[error("store I/O: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Behaviour of [`KeyStore::set`] on a name that is already present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// The new value replaces the old one.
    Overwrite,
    /// `set` fails with [`StoreError::AlreadyExists`].
    Refuse,
}

/// Named text entries holding serialized key material and ciphertexts.
pub trait KeyStore {
    fn overwrite_policy(&self) -> OverwritePolicy;

    fn exists(&self, name: &str) -> StoreResult<bool>;

    /// Returns `StoreError::NotFound` if `name` is absent.
    fn get(&self, name: &str) -> StoreResult<String>;

    fn set(&mut self, name: &str, value: &str) -> StoreResult<()>;

    /// Removes `name`. Succeeds if it was already absent.
    fn remove(&mut self, name: &str) -> StoreResult<()>;
}

impl<S: KeyStore + ?Sized> KeyStore for Box<S> {
    fn overwrite_policy(&self) -> OverwritePolicy {
        (**self).overwrite_policy()
    }

    fn exists(&self, name: &str) -> StoreResult<bool> {
        (**self).exists(name)
    }

    fn get(&self, name: &str) -> StoreResult<String> {
        (**self).get(name)
    }

    fn set(&mut self, name: &str, value: &str) -> StoreResult<()> {
        (**self).set(name, value)
    }

    fn remove(&mut self, name: &str) -> StoreResult<()> {
        (**self).remove(name)
    }
}

impl<S: KeyStore + ?Sized> KeyStore for &mut S {
    fn overwrite_policy(&self) -> OverwritePolicy {
        (**self).overwrite_policy()
    }

    fn exists(&self, name: &str) -> StoreResult<bool> {
        (**self).exists(name)
    }

    fn get(&self, name: &str) -> StoreResult<String> {
        (**self).get(name)
    }

    fn set(&mut self, name: &str, value: &str) -> StoreResult<()> {
        (**self).set(name, value)
    }

    fn remove(&mut self, name: &str) -> StoreResult<()> {
        (**self).remove(name)
    }
}

pub(crate) fn check_name(name: &str) -> StoreResult<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.starts_with('#') {
        "name starts with '#'"
    } else if name.contains('=') {
        "name contains '='"
    } else if name.chars().any(|c| c.is_whitespace() || c == '\0') {
        "name contains whitespace or NUL"
    } else {
        return Ok(());
    };
    Err(StoreError::InvalidEntry {
        name: name.to_string(),
        reason,
    })
}
