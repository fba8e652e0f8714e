//! In-process store backend

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{StorageKey, Store, StoreError};

/// Store backend holding serialized blobs in a process-local map.
///
/// Blobs go through the same JSON round-trip as the file backend, so tests
/// against it exercise serialization too. Single-threaded by design, like
/// the register itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<HashMap<&'static str, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the raw blob under a key, bypassing serialization.
    ///
    /// Test hook for simulating corrupt data.
    pub fn put_raw(&self, key: StorageKey, blob: impl Into<String>) {
        self.blobs.borrow_mut().insert(key.as_str(), blob.into());
    }
}

impl Store for MemoryStore {
    fn try_save<T: Serialize>(&self, key: StorageKey, records: &[T]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(records)?;
        self.blobs.borrow_mut().insert(key.as_str(), blob);
        Ok(())
    }

    fn try_load<T: DeserializeOwned>(
        &self,
        key: StorageKey,
    ) -> Result<Option<Vec<T>>, StoreError> {
        match self.blobs.borrow().get(key.as_str()) {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }

    fn try_remove(&self, key: StorageKey) -> Result<(), StoreError> {
        self.blobs.borrow_mut().remove(key.as_str());
        Ok(())
    }
}
