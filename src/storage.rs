//! Client-local preference storage
//!
//! The widget persists one preference (`theme`). In the browser it lives in
//! `localStorage`; native builds keep one small file per key under the user's
//! local data directory.

use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value preferences that outlive the page.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// ============================================
// Platform Backend
// ============================================

/// `localStorage` on web, files on native.
#[derive(Clone, Debug)]
pub struct LocalPreferences {
    #[cfg(not(target_arch = "wasm32"))]
    root: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalPreferences {
    pub fn new() -> Self {
        let root = dirs::data_local_dir()
            .map(|dir| dir.join("sova").join("preferences"))
            .unwrap_or_else(|| PathBuf::from("cache").join("preferences"));
        Self { root }
    }

    /// Keeps preferences under `root` instead of the data directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(sanitize_key(key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl LocalPreferences {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::delete(key);
        Ok(())
    }
}

impl Default for LocalPreferences {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// In-memory Backend
// ============================================

/// Process-local store for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Sanitize storage key for filesystem use
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}
