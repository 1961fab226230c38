//! Persisted preference storage.
//!
//! The page persists exactly one value: the theme choice, under the `"theme"`
//! key. Storage is modeled as a minimal key-value trait so the theme logic is
//! testable without a browser; on WASM the store is backed by localStorage.

use std::collections::HashMap;

/// Errors that can occur when writing a preference.
///
/// Reads never error: an unreadable store is treated as "no preference".
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store is not available (e.g. storage disabled)
    #[error("preference storage unavailable")]
    Unavailable,

    /// The backing store rejected the write
    #[error("preference write failed: {0}")]
    WriteFailed(String),
}

/// Minimal key-value store for persisted preferences.
pub trait PreferenceStore {
    /// Read a value. Absence and unreadability both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store used on native targets and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose writes always fail, emulating disabled storage.
    pub fn failing() -> Self {
        Self {
            values: HashMap::new(),
            fail_writes: true,
        }
    }

    /// Create a store pre-seeded with a single key.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// localStorage-backed store (WASM only).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to read {:?} from localStorage: {:?}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "dark").expect("write should succeed");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_failing_store_reports_unavailable() {
        let mut store = MemoryStore::failing();
        assert!(matches!(
            store.set("theme", "dark"),
            Err(StorageError::Unavailable)
        ));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_seeded_store() {
        let store = MemoryStore::with_value("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }
}
