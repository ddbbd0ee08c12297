//! Directory-of-files backend.
//!
//! Each key is stored as `<dir>/<key>.json`. Writes land in a temp file that
//! is renamed over the target, so a single key is never half-written. An
//! advisory lock on `<dir>/.lock` serializes writers from separate processes.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use uuid::Uuid;

use super::backend::{is_valid_key, KeyValueBackend};
use super::error::StorageError;

const LOCK_FILE: &str = ".lock";
const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }

    fn resolve_all(&self, entries: &[(String, String)]) -> Result<Vec<(PathBuf, String)>, StorageError> {
        entries
            .iter()
            .map(|(key, value)| Ok((self.path_for(key)?, value.clone())))
            .collect()
    }

    async fn write_locked(&self, key: &str, files: Vec<(PathBuf, String)>) -> Result<(), StorageError> {
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || write_under_lock(&dir, &files))
            .await
            .map_err(|e| StorageError::Unavailable {
                reason: format!("writer task failed: {e}"),
            })?
            .map_err(|source| StorageError::Io {
                key: key.to_string(),
                source,
            })
    }
}

#[async_trait]
impl KeyValueBackend for FileBackend {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        self.write_locked(key, vec![(path, value.to_string())]).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Holds the directory lock across all keys. Each file is still replaced
    /// on its own: a crash midway leaves a mix of old and new files.
    async fn set_items(&self, entries: &[(String, String)]) -> Result<(), StorageError> {
        let files = self.resolve_all(entries)?;
        let label = entries
            .iter()
            .map(|(key, _)| key.as_str())
            .collect::<Vec<_>>()
            .join(",");
        self.write_locked(&label, files).await
    }
}

fn write_under_lock(dir: &Path, files: &[(PathBuf, String)]) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(dir.join(LOCK_FILE))?;
    lock.lock_exclusive()?;
    let _unlock = scopeguard::guard(lock, |lock| {
        let _ = FileExt::unlock(&lock);
    });

    for (path, value) in files {
        replace_file(dir, path, value)?;
    }
    Ok(())
}

fn replace_file(dir: &Path, path: &Path, value: &str) -> io::Result<()> {
    let tmp_path = dir.join(format!(".{}.tmp", Uuid::new_v4()));
    let tmp = scopeguard::guard(tmp_path, |tmp| {
        let _ = fs::remove_file(tmp);
    });

    {
        let mut file = File::create(&*tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&*tmp, path)?;

    // Renamed into place; nothing left to clean up.
    scopeguard::ScopeGuard::into_inner(tmp);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.get_item("users").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("nested"));
        backend.set_item("users", "[]").await.unwrap();
        assert_eq!(backend.get_item("users").await.unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested").join("users.json").exists());
    }

    #[tokio::test]
    async fn write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        backend
            .set_items(&[
                ("session".to_string(), "{}".to_string()),
                ("users".to_string(), "[]".to_string()),
            ])
            .await
            .unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn remove_missing_key_is_ok() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.remove_item("session").await.unwrap();
    }

    #[tokio::test]
    async fn invalid_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        let err = backend.set_item("../escape", "x").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }));
    }
}
