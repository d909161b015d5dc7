//! Durable key/value storage
//!
//! A tiny local-storage analogue: string keys to string values, flushed to a
//! JSON file on every write. Only the mini-CTA dismissal flag lives here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Client-side key/value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// JSON-file backed store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Default store location in the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        super::project_dirs().map(|dirs| dirs.data_dir().join("storage.json"))
    }

    /// Open the store at `path`
    ///
    /// A missing file is an empty store. An unreadable one is logged and
    /// treated as empty too; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Starting with empty storage: {:#}", e);
                BTreeMap::new()
            }
        };
        tracing::debug!("Storage opened at {} ({} keys)", path.display(), entries.len());
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Volatile store, used when no data directory is available and in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open the default durable store, or a volatile one if there is no data dir
pub fn open_default() -> Box<dyn KeyValueStore> {
    match FileStore::default_path() {
        Some(path) => {
            let store = FileStore::open(path);
            tracing::info!("Using storage at {}", store.path().display());
            Box::new(store)
        }
        None => {
            tracing::warn!("No data directory available, dismiss state will not persist");
            Box::new(MemoryStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("storage.json");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("caus_mini_cta_closed"), None);
        store.set("caus_mini_cta_closed", "1").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("caus_mini_cta_closed").as_deref(), Some("1"));
    }

    #[test]
    fn test_set_overwrites_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path);
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();

        assert_eq!(store.path(), path.as_path());
        assert_eq!(FileStore::open(&path).get("a").as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("anything"), None);

        // Next write replaces the broken file
        store.set("k", "v").unwrap();
        assert_eq!(FileStore::open(&path).get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.get("other"), None);
    }
}
