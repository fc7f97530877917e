// Persistence backends: keyed string storage

use crate::error::StoreError;
use fs2::FileExt;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keyed string storage the store saves into
///
/// Implementations are synchronous; failures are reported, never fatal to
/// the store.
pub trait StorageBackend {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-per-key backend rooted at a data directory
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open or create a backend rooted at `dir`
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            StoreError::Persistence(format!("failed to create {}: {e}", dir.display()))
        })?;
        debug!(?dir, "opened file backend");
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).map_err(|e| {
            StoreError::Persistence(format!("failed to read {}: {e}", path.display()))
        })?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let mut file = fs::OpenOptions::new().create(true).write(true).open(&path)?;

        // Acquire exclusive lock before truncating so a concurrent reader
        // never sees a partial write
        file.lock_exclusive()?;
        file.set_len(0)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;

        // Lock is released when file is dropped
        Ok(())
    }
}

/// In-memory backend for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
