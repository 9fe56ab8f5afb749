use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use stories_logging::{stories_debug, stories_warn};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Durable string key-value store, the `localStorage` of this crate.
pub trait StringStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: StringStore + ?Sized> StringStore for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        store
    }
}

impl StringStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A string cell mirrored into a [`StringStore`] under a fixed key.
///
/// Store failures never surface: they are logged and the in-memory value
/// stays authoritative for the rest of the process.
#[derive(Debug)]
pub struct PersistentValue<S: StringStore> {
    store: S,
    key: String,
    value: String,
}

impl<S: StringStore> PersistentValue<S> {
    /// Reads `key` from the store, falling back to `default` when the entry
    /// is missing, empty or unreadable. The resulting value is written back.
    pub fn create(store: S, key: impl Into<String>, default: impl Into<String>) -> Self {
        let key = key.into();
        let value = match store.get_item(&key) {
            Ok(Some(stored)) if !stored.is_empty() => stored,
            Ok(_) => default.into(),
            Err(err) => {
                stories_warn!("Failed to read {:?} from store: {}", key, err);
                default.into()
            }
        };
        let cell = Self { store, key, value };
        cell.write_back();
        cell
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.write_back();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn write_back(&self) {
        match self.store.set_item(&self.key, &self.value) {
            Ok(()) => stories_debug!("Stored {:?} = {:?}", self.key, self.value),
            Err(err) => stories_warn!("Failed to write {:?} to store: {}", self.key, err),
        }
    }
}
