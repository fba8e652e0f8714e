//! Flat key-value blob persistence for RiskLedger.
//!
//! One key per entity collection, serialized as a JSON array blob. The
//! [`Store`] contract mirrors browser-local storage: `save` overwrites,
//! `load` returns a caller-supplied fallback on missing or corrupt data,
//! logging but never failing. `try_*` variants surface the underlying
//! [`StoreError`] for callers that want it.
//!
//! # Examples
//!
//! ```
//! use riskledger_store::{MemoryStore, StorageKey, Store};
//! use riskledger_core::Threat;
//!
//! let store = MemoryStore::new();
//! let threats: Vec<Threat> = store.load(StorageKey::Threats, Vec::new());
//! assert!(threats.is_empty());
//! ```

mod dataset;
mod file;
mod keys;
mod memory;

#[cfg(test)]
mod tests;

pub use dataset::{clear_all, load_dataset, save_dataset};
pub use file::FileStore;
pub use keys::StorageKey;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Persistence error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A flat key -> array-of-records blob store.
///
/// Implementations serialize each collection as one JSON blob under its
/// [`StorageKey`]. The infallible `save`/`load` surface is the register's
/// contract; failures are logged and degrade to the fallback.
pub trait Store {
    /// Serializes and overwrites the collection stored under `key`.
    fn try_save<T: Serialize>(&self, key: StorageKey, records: &[T]) -> Result<(), StoreError>;

    /// Loads the collection stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored under the key.
    fn try_load<T: DeserializeOwned>(&self, key: StorageKey)
        -> Result<Option<Vec<T>>, StoreError>;

    /// Removes whatever is stored under `key`.
    fn try_remove(&self, key: StorageKey) -> Result<(), StoreError>;

    /// Saves the collection, logging instead of failing.
    fn save<T: Serialize>(&self, key: StorageKey, records: &[T]) {
        if let Err(error) = self.try_save(key, records) {
            tracing::error!(key = %key, %error, "failed to save collection");
        }
    }

    /// Loads the collection, or the fallback on missing or corrupt data.
    ///
    /// A corrupt blob is logged; a missing key is not an anomaly.
    fn load<T: DeserializeOwned>(&self, key: StorageKey, fallback: Vec<T>) -> Vec<T> {
        match self.try_load(key) {
            Ok(Some(records)) => records,
            Ok(None) => fallback,
            Err(error) => {
                tracing::error!(key = %key, %error, "failed to load collection, using fallback");
                fallback
            }
        }
    }

    /// Removes the collection, logging instead of failing.
    fn remove(&self, key: StorageKey) {
        if let Err(error) = self.try_remove(key) {
            tracing::warn!(key = %key, %error, "failed to remove collection");
        }
    }
}

impl<S: Store> Store for &S {
    fn try_save<T: Serialize>(&self, key: StorageKey, records: &[T]) -> Result<(), StoreError> {
        (**self).try_save(key, records)
    }

    fn try_load<T: DeserializeOwned>(
        &self,
        key: StorageKey,
    ) -> Result<Option<Vec<T>>, StoreError> {
        (**self).try_load(key)
    }

    fn try_remove(&self, key: StorageKey) -> Result<(), StoreError> {
        (**self).try_remove(key)
    }
}
