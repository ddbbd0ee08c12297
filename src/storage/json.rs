//! JSON storage adapter.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::KeyValueBackend;
use super::error::StorageError;
use super::file::FileBackend;

/// Serializing wrapper over a [`KeyValueBackend`].
///
/// Every operation is at-most-once with no retry. Failures are logged and
/// resolve to a safe default: `None` on read, nothing on write.
#[derive(Clone)]
pub struct JsonStorage {
    backend: Arc<dyn KeyValueBackend>,
}

impl JsonStorage {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Storage rooted at a directory on disk.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileBackend::new(dir)))
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Read and decode `key`. Missing keys and undecodable values are `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(backend = self.backend.name(), error = %e, "storage read failed, treating as empty");
                None
            }
        }
    }

    /// Encode and write `value` under `key`. Failures are logged and dropped.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = match encode(key, value) {
            Ok(text) => self.backend.set_item(key, &text).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::warn!(backend = self.backend.name(), error = %e, "storage write failed, value not persisted");
        }
    }

    /// Encode and write several values with one backend call.
    ///
    /// If any value fails to encode, nothing is written.
    pub async fn set_many(&self, entries: Vec<(String, serde_json::Value)>) {
        let encoded: Result<Vec<_>, _> = entries
            .into_iter()
            .map(|(key, value)| encode(&key, &value).map(|text| (key, text)))
            .collect();
        let result = match encoded {
            Ok(items) => self.backend.set_items(&items).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::warn!(backend = self.backend.name(), error = %e, "storage batch write failed, values not persisted");
        }
    }

    pub async fn delete(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key).await {
            tracing::warn!(backend = self.backend.name(), error = %e, "storage delete failed");
        }
    }

    async fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(text) = self.backend.get_item(key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            })
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })
}
