//! File-backed storage adapter
//!
//! This module persists adapter entries as a single versioned JSON document
//! with a checksum for corruption detection and atomic temp-file writes.

use crate::adapter::{Result, StorageAdapter, StorageError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// On-disk document wrapping the stored entries
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageDocument {
    /// Schema version
    version: u32,
    /// Checksum of the serialized entries, for corruption detection
    checksum: String,
    /// The stored entries
    entries: BTreeMap<String, String>,
}

impl StorageDocument {
    fn new(version: u32, entries: BTreeMap<String, String>) -> Result<Self> {
        let checksum = Self::compute_checksum(&entries)?;
        Ok(Self { version, checksum, entries })
    }

    fn compute_checksum(entries: &BTreeMap<String, String>) -> Result<String> {
        let json = serde_json::to_string(entries)?;
        Ok(format!("{:x}", md5::compute(&json)))
    }

    fn verify_checksum(&self) -> Result<()> {
        let computed = Self::compute_checksum(&self.entries)?;
        if computed != self.checksum {
            return Err(StorageError::Corruption(format!(
                "Checksum mismatch: expected {}, got {}",
                self.checksum, computed
            )));
        }
        Ok(())
    }
}

/// Configuration for [`FileStorage`]
#[derive(Debug, Clone)]
pub struct FileStorageConfig {
    /// Path to the document file
    pub path: PathBuf,
    /// Current schema version
    pub version: u32,
    /// Write via temp file + rename
    pub atomic_writes: bool,
}

impl FileStorageConfig {
    /// Create a new configuration for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            version: 1,
            atomic_writes: true,
        }
    }

    /// Set the schema version
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Enable or disable atomic writes
    pub fn atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }
}

/// Device-local storage adapter backed by a JSON document
///
/// Entries live in memory and every mutation is flushed to disk before the
/// call returns. A missing file on open is treated as an empty store; a
/// corrupt or version-mismatched file is a distinct error so callers can
/// decide whether to discard it.
pub struct FileStorage {
    config: FileStorageConfig,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open the store, loading any existing document from disk
    pub async fn open(config: FileStorageConfig) -> Result<Self> {
        let entries = match fs::read_to_string(&config.path).await {
            Ok(contents) => {
                let document: StorageDocument = serde_json::from_str(&contents)?;
                document.verify_checksum()?;
                if document.version != config.version {
                    return Err(StorageError::VersionMismatch {
                        expected: config.version,
                        found: document.version,
                    });
                }
                document.entries
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %config.path.display(), "no storage document, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            config,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing document
    pub fn path(&self) -> &std::path::Path {
        &self.config.path
    }

    async fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let document = StorageDocument::new(self.config.version, entries.clone())?;
        let json = serde_json::to_string_pretty(&document)?;

        if self.config.atomic_writes {
            self.write_atomic(&json).await
        } else {
            fs::write(&self.config.path, json).await.map_err(Into::into)
        }
    }

    /// Write atomically using temp file + rename
    async fn write_atomic(&self, contents: &str) -> Result<()> {
        let temp_path = self.config.path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.config.path).await?;
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            self.flush(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config(dir: &TempDir) -> FileStorageConfig {
        FileStorageConfig::new(dir.path().join("store.json"))
    }

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_config(&dir)).await.unwrap();
        assert!(storage.get("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_config(&dir)).await.unwrap();

        storage.set("session", "payload").await.unwrap();
        assert_eq!(
            storage.get("session").await.unwrap(),
            Some("payload".to_string())
        );
    }

    #[tokio::test]
    async fn test_entries_survive_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let storage = FileStorage::open(temp_config(&dir)).await.unwrap();
            storage.set("theme", "light").await.unwrap();
            storage.set("session", "token").await.unwrap();
        }

        let storage = FileStorage::open(temp_config(&dir)).await.unwrap();
        assert_eq!(storage.get("theme").await.unwrap(), Some("light".to_string()));
        assert_eq!(storage.get("session").await.unwrap(), Some("token".to_string()));
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let dir = TempDir::new().unwrap();

        {
            let storage = FileStorage::open(temp_config(&dir)).await.unwrap();
            storage.set("key", "value").await.unwrap();
            storage.remove("key").await.unwrap();
        }

        let storage = FileStorage::open(temp_config(&dir)).await.unwrap();
        assert!(storage.get("key").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_detected() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);

        {
            let storage = FileStorage::open(config.clone()).await.unwrap();
            storage.set("key", "value").await.unwrap();
        }

        // Tamper with the stored entries without fixing the checksum
        let contents = std::fs::read_to_string(&config.path).unwrap();
        let tampered = contents.replace("value", "VALUE");
        std::fs::write(&config.path, tampered).unwrap();

        let result = FileStorage::open(config).await;
        assert!(matches!(result, Err(StorageError::Corruption(_))));
    }

    #[tokio::test]
    async fn test_version_mismatch_is_detected() {
        let dir = TempDir::new().unwrap();

        {
            let storage = FileStorage::open(temp_config(&dir).version(1)).await.unwrap();
            storage.set("key", "value").await.unwrap();
        }

        let result = FileStorage::open(temp_config(&dir).version(2)).await;
        assert!(matches!(
            result,
            Err(StorageError::VersionMismatch { expected: 2, found: 1 })
        ));
    }

    #[tokio::test]
    async fn test_no_leftover_temp_file() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_config(&dir)).await.unwrap();
        storage.set("key", "value").await.unwrap();

        assert!(!dir.path().join("store.tmp").exists());
    }
}
