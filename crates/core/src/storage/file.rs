//! File-based slot storage
//!
//! Each slot is one file inside a data directory. Writes go to a temporary
//! file first and are renamed over the slot, so a crash mid-write leaves the
//! previous value in place.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::SlotStorage;
use crate::{Error, Result};

/// Slot storage backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    /// Create a storage rooted at `dir`
    ///
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::InvalidInput(format!("Invalid slot name: {:?}", slot)));
        }
        Ok(self.dir.join(slot))
    }
}

#[async_trait]
impl SlotStorage for FileSlotStorage {
    async fn get(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(format!(
                "Failed to read slot {}: {}",
                slot, e
            ))),
        }
    }

    async fn set(&self, slot: &str, value: &str) -> Result<()> {
        let path = self.slot_path(slot)?;

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            Error::Storage(format!("Failed to create directory: {}", e))
        })?;

        let temp_path = self
            .dir
            .join(format!(".{}.tmp", Uuid::new_v4().as_hyphenated()));
        tokio::fs::write(&temp_path, value).await.map_err(|e| {
            Error::Storage(format!("Failed to write temp file for slot {}: {}", slot, e))
        })?;

        let backup_path = self
            .dir
            .join(format!(".{}.bak", Uuid::new_v4().as_hyphenated()));

        let mut had_original = false;
        if tokio::fs::metadata(&path).await.is_ok() {
            had_original = true;
            if let Err(err) = tokio::fs::rename(&path, &backup_path).await {
                let _ = tokio::fs::remove_file(&temp_path).await;
                return Err(Error::Storage(format!(
                    "Failed to prepare atomic write of slot {}: {}",
                    slot, err
                )));
            }
        }

        if let Err(err) = tokio::fs::rename(&temp_path, &path).await {
            if had_original {
                let _ = tokio::fs::rename(&backup_path, &path).await;
            }
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(Error::Storage(format!(
                "Failed to finalize atomic write of slot {}: {}",
                slot, err
            )));
        }

        if had_original {
            let _ = tokio::fs::remove_file(&backup_path).await;
        }

        Ok(())
    }

    async fn remove(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(format!(
                "Failed to remove slot {}: {}",
                slot, e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileSlotStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileSlotStorage::new(temp_dir.path().join("data"));
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn test_missing_slot_is_none() {
        let (storage, _temp) = create_test_storage();
        assert_eq!(storage.get("jwt_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_directory_and_overwrites() {
        let (storage, _temp) = create_test_storage();

        storage.set("jwt_token", "first").await.unwrap();
        storage.set("jwt_token", "second").await.unwrap();

        assert!(storage.dir().join("jwt_token").exists());
        assert_eq!(
            storage.get("jwt_token").await.unwrap(),
            Some("second".to_string())
        );
    }

    #[tokio::test]
    async fn test_set_leaves_no_temp_files() {
        let (storage, _temp) = create_test_storage();

        storage.set("dashboard_tasks", "[]").await.unwrap();
        storage.set("dashboard_tasks", "[1]").await.unwrap();
        storage.set("jwt_token", "abc").await.unwrap();

        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(storage.dir()).await.unwrap();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        assert_eq!(names, vec!["dashboard_tasks", "jwt_token"]);
        assert_eq!(
            storage.get("dashboard_tasks").await.unwrap(),
            Some("[1]".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (storage, _temp) = create_test_storage();

        storage.set("jwt_token", "abc").await.unwrap();
        storage.remove("jwt_token").await.unwrap();
        storage.remove("jwt_token").await.unwrap();

        assert_eq!(storage.get("jwt_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_like_slot_names() {
        let (storage, _temp) = create_test_storage();

        let result = storage.set("../escape", "x").await;
        match result.unwrap_err() {
            Error::InvalidInput(msg) => assert!(msg.contains("Invalid slot name")),
            e => panic!("Expected InvalidInput error, got: {:?}", e),
        }
    }
}
