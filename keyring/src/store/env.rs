//! Process environment store

use std::env::{self, VarError};

use super::{KeyStore, OverwritePolicy, StoreError, StoreResult, check_name};

/// Entries live in environment variables named `{prefix}{name}`.
///
/// `set` overwrites. Values are visible to child processes spawned
/// afterwards and vanish with the process.
///
/// Writing the environment is only sound while no other thread reads or
/// writes it, so use this store from a single-threaded program or hold
/// every other environment access off for the duration of the call.
#[derive(Clone, Debug)]
pub struct EnvStore {
    prefix: String,
}

impl EnvStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    fn var_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

impl KeyStore for EnvStore {
    fn overwrite_policy(&self) -> OverwritePolicy {
        OverwritePolicy::Overwrite
    }

    fn exists(&self, name: &str) -> StoreResult<bool> {
        Ok(env::var_os(self.var_name(name)).is_some())
    }

    fn get(&self, name: &str) -> StoreResult<String> {
        match env::var(self.var_name(name)) {
            Ok(value) => Ok(value),
            Err(VarError::NotPresent) => Err(StoreError::NotFound(name.to_string())),
            Err(VarError::NotUnicode(_)) => Err(StoreError::NotUnicode(name.to_string())),
        }
    }

    fn set(&mut self, name: &str, value: &str) -> StoreResult<()> {
        check_name(name)?;
        if value.contains('\0') {
            return Err(StoreError::InvalidEntry {
                name: name.to_string(),
                reason: "value contains NUL",
            });
        }
        // SAFETY: callers must not touch the environment from other
        // threads while this store writes to it (see the type docs).
        unsafe { env::set_var(self.var_name(name), value) };
        Ok(())
    }

    fn remove(&mut self, name: &str) -> StoreResult<()> {
        // SAFETY: see `set`.
        unsafe { env::remove_var(self.var_name(name)) };
        Ok(())
    }
}
