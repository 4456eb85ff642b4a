use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tokio::{
    fs,
    sync::{Mutex, MutexGuard},
};
use tracing::{error, warn};

use crate::domain::common::entities::app_errors::CoreError;

enum Loaded<T> {
    Missing,
    Parsed(T),
    Unreadable(String),
}

/// JSON documents under one data directory, sharing a single lock.
///
/// Callers hold [`JsonFileStore::lock`] across a read-modify-write so that
/// concurrent requests within the process never interleave.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Checks that the data directory exists or can be created.
    pub async fn ping(&self) -> Result<(), CoreError> {
        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            error!("Data dir {} is not usable: {}", self.data_dir.display(), e);
            CoreError::StorageError(e.to_string())
        })
    }

    async fn load<T: DeserializeOwned>(path: &Path) -> Loaded<T> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Loaded::Missing,
            Err(e) => return Loaded::Unreadable(e.to_string()),
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Loaded::Parsed(value),
            Err(e) => Loaded::Unreadable(e.to_string()),
        }
    }

    /// Reads a document for a lookup. Missing and unreadable files read as `None`.
    pub async fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.path(name);
        match Self::load(&path).await {
            Loaded::Parsed(value) => Some(value),
            Loaded::Missing => None,
            Loaded::Unreadable(reason) => {
                warn!("Ignoring unreadable {}: {}", path.display(), reason);
                None
            }
        }
    }

    /// Reads a document that is about to be rewritten.
    ///
    /// An unreadable file is renamed to `<name>.corrupt-<timestamp>` first and
    /// then reads as `None`; if it cannot be moved the write is refused.
    pub async fn read_for_update<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Option<T>, CoreError> {
        let path = self.path(name);
        match Self::load(&path).await {
            Loaded::Parsed(value) => Ok(Some(value)),
            Loaded::Missing => Ok(None),
            Loaded::Unreadable(reason) => {
                let aside = self.path(&format!(
                    "{name}.corrupt-{}",
                    Utc::now().format("%Y%m%dT%H%M%S%.3fZ")
                ));
                fs::rename(&path, &aside).await.map_err(|e| {
                    error!("Failed to move {} aside: {}", path.display(), e);
                    CoreError::StorageError(e.to_string())
                })?;
                warn!(
                    "Moved unreadable {} to {}: {}",
                    path.display(),
                    aside.display(),
                    reason
                );
                Ok(None)
            }
        }
    }

    /// Replaces a document through a temporary file and a rename.
    pub async fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), CoreError> {
        let storage_error = |e: std::io::Error| {
            error!("Failed to write {}: {}", name, e);
            CoreError::StorageError(e.to_string())
        };

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(storage_error)?;

        let body = serde_json::to_string_pretty(value).map_err(|e| {
            error!("Failed to serialize {}: {}", name, e);
            CoreError::InternalServerError
        })?;

        let path = self.path(name);
        let tmp = self.path(&format!("{name}.tmp"));
        fs::write(&tmp, body).await.map_err(storage_error)?;
        fs::rename(&tmp, &path).await.map_err(storage_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    type Doc = BTreeMap<String, u32>;

    fn corrupt_copies(dir: &Path, name: &str) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&format!("{name}.corrupt-")))
            })
            .collect()
    }

    #[tokio::test]
    async fn test_write_then_read_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));

        assert_eq!(store.read::<Doc>("doc.json").await, None);
        store
            .write("doc.json", &Doc::from([("a".to_string(), 1)]))
            .await
            .unwrap();

        assert_eq!(
            store.read::<Doc>("doc.json").await,
            Some(Doc::from([("a".to_string(), 1)]))
        );
        assert!(!store.path("doc.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_lookup_leaves_corrupt_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.path("doc.json"), "{not json").unwrap();

        assert_eq!(store.read::<Doc>("doc.json").await, None);
        assert_eq!(
            std::fs::read_to_string(store.path("doc.json")).unwrap(),
            "{not json"
        );
        assert!(corrupt_copies(dir.path(), "doc.json").is_empty());
    }

    #[tokio::test]
    async fn test_update_moves_corrupt_file_aside() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.path("doc.json"), "{not json").unwrap();

        let current = store.read_for_update::<Doc>("doc.json").await.unwrap();
        assert_eq!(current, None);
        assert!(!store.path("doc.json").exists());

        let aside = corrupt_copies(dir.path(), "doc.json");
        assert_eq!(aside.len(), 1);
        assert_eq!(std::fs::read_to_string(&aside[0]).unwrap(), "{not json");
    }
}
