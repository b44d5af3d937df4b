//! Host state bundle: a typed key-value container for saved view state.
//!
//! The host supplies a bundle at save time and hands it back unchanged at
//! restore time. [`StateBundle`] wraps a [`BundleBackend`] byte store with
//! typed access; values are encoded with bincode.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::BundleError;

/// Byte storage behind a [`StateBundle`].
pub trait BundleBackend {
    fn get_bytes(&self, key: &str) -> Option<Vec<u8>>;

    fn set_bytes(&mut self, key: &str, value: Vec<u8>);

    fn delete(&mut self, key: &str);

    /// All keys starting with `prefix`, in ascending order.
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// In-process bundle backend.
///
/// The whole map can be encoded with [`to_bytes`](Self::to_bytes), so a
/// host may write it to disk and restore it after a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBundle {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BundleError> {
        bincode::serialize(self).map_err(BundleError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BundleError> {
        bincode::deserialize(bytes).map_err(BundleError::Decode)
    }
}

impl BundleBackend for MemoryBundle {
    fn get_bytes(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set_bytes(&mut self, key: &str, value: Vec<u8>) {
        self.entries.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect()
    }
}

/// Typed view over a bundle backend.
pub struct StateBundle<B: BundleBackend = MemoryBundle> {
    backend: B,
}

impl<B: BundleBackend> StateBundle<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Get a typed value for a key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, BundleError> {
        match self.backend.get_bytes(key) {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes).map_err(BundleError::Decode)?)),
            None => Ok(None),
        }
    }

    /// Set a typed value for a key.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), BundleError> {
        let bytes = bincode::serialize(value).map_err(BundleError::Encode)?;
        self.backend.set_bytes(key, bytes);
        Ok(())
    }

    pub fn delete(&mut self, key: &str) {
        self.backend.delete(key);
    }

    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.backend.keys_with_prefix(prefix)
    }
}

impl Default for StateBundle<MemoryBundle> {
    fn default() -> Self {
        Self::new(MemoryBundle::new())
    }
}

impl<B: BundleBackend + std::fmt::Debug> std::fmt::Debug for StateBundle<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateBundle").field("backend", &self.backend).finish()
    }
}
