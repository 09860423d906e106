//! JSON file-based key-value backend.
//!
//! This module provides a human-readable storage implementation using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) so a
//! crash never leaves a half-written file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) after the whole file is loaded on open
//! - **Write**: O(n), the whole document is serialized on every change
//! - **Best for**: a handful of keys holding small documents

use crate::domain::error::{CountryscopeError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Unix timestamp of the last successful save.
    #[serde(default)]
    updated_at: Option<i64>,

    /// Stored values by key.
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            updated_at: None,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value backend.
///
/// The whole document is kept in memory and persisted on every modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "updated_at": 1760900000,
///   "entries": {
///     "darkMode": "true",
///     "favorites": "[{\"id\":\"PER\",\"name\":\"Peru\",...}]"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the document, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// Parent directories are created automatically. A missing file starts an
    /// empty store. A file that cannot be parsed is treated as absent: it is
    /// logged and replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use countryscope::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/countryscope.json"))?;
    /// # Ok::<(), countryscope::CountryscopeError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(key_count = data.entries.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads storage data from a JSON file, defaulting on malformed content.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file cannot be read.
    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;

        match serde_json::from_str::<StorageData>(&contents) {
            Ok(data) => {
                tracing::debug!(
                    version = data.version,
                    keys = data.entries.len(),
                    "loaded storage data"
                );
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "storage file is malformed, starting empty");
                Ok(StorageData::default())
            }
        }
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write or the rename
    /// fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving storage data");

        self.data.updated_at = Some(chrono::Utc::now().timestamp());
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| CountryscopeError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("storage saved successfully");
        Ok(())
    }
}

impl KeyValueStore for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, value_len = value.len()).entered();

        if self.data.entries.get(key) == Some(&value) {
            tracing::trace!("value unchanged");
            return Ok(());
        }

        self.data.entries.insert(key.to_string(), value);
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove", key = %key).entered();

        if self.data.entries.remove(key).is_some() {
            self.dirty = true;
            self.save_to_file()?;
        }
        Ok(())
    }
}

impl Drop for JsonStorage {
    /// Retries a failed save on drop.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        {
            let mut store = JsonStorage::new(path.clone()).unwrap();
            store.set("darkMode", "true".to_string()).unwrap();
        }

        let store = JsonStorage::new(path).unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn malformed_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let mut store = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);

        store.set("favorites", "[]".to_string()).unwrap();
        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn leaves_no_temporary_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonStorage::new(path).unwrap();
        store.set("favorites", "[]".to_string()).unwrap();
        store.remove("favorites").unwrap();

        for entry in std::fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            assert!(!name.to_string_lossy().ends_with(".tmp"), "leftover {name:?}");
        }
    }
}
