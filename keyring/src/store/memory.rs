//! In-memory store (for tests and one-shot runs)

use utils::map::Map;

use super::{KeyStore, OverwritePolicy, StoreError, StoreResult, check_name};

/// Process-local namespace. Not persistent; `set` overwrites.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Map<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyStore for MemoryStore {
    fn overwrite_policy(&self) -> OverwritePolicy {
        OverwritePolicy::Overwrite
    }

    fn exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.entries.contains_key(name))
    }

    fn get(&self, name: &str) -> StoreResult<String> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn set(&mut self, name: &str, value: &str) -> StoreResult<()> {
        check_name(name)?;
        self.entries.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, name: &str) -> StoreResult<()> {
        self.entries.remove(name);
        Ok(())
    }
}
