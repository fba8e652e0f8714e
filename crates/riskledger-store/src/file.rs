//! File-backed store backend

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{StorageKey, Store, StoreError};

/// Store backend keeping one JSON file per collection key in a directory.
///
/// # Examples
///
/// ```no_run
/// use riskledger_store::{FileStore, StorageKey, Store};
/// use riskledger_core::Threat;
///
/// let store = FileStore::open(".riskledger")?;
/// let threats: Vec<Threat> = store.load(StorageKey::Threats, Vec::new());
/// # Ok::<(), riskledger_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    /// Directory the blobs live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl Store for FileStore {
    fn try_save<T: Serialize>(&self, key: StorageKey, records: &[T]) -> Result<(), StoreError> {
        let blob = serde_json::to_string_pretty(records)?;
        fs::write(self.blob_path(key), blob)?;
        Ok(())
    }

    fn try_load<T: DeserializeOwned>(
        &self,
        key: StorageKey,
    ) -> Result<Option<Vec<T>>, StoreError> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&blob)?))
    }

    fn try_remove(&self, key: StorageKey) -> Result<(), StoreError> {
        let path = self.blob_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
