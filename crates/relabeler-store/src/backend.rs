//! Backend seam for the shared key-value settings store.
//!
//! # Design
//! - The host owns persistence; the adapter only needs get/set/delete/enumerate.
//! - Methods take `&self` so a backend can be shared behind an `Arc` across requests.
//! - Values are JSON so text labels and boolean toggles live in one document.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

use crate::error::StoreResult;

/// Abstraction over the persistent settings store consumed by the adapter.
pub trait SettingsBackend: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
    /// Fetch the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be written.
    fn set(&self, key: &str, value: Value) -> StoreResult<()>;
    /// Remove `key`; removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be written.
    fn delete(&self, key: &str) -> StoreResult<()>;
    /// Snapshot every stored entry.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn enumerate(&self) -> StoreResult<BTreeMap<String, Value>>;
}

impl<T: SettingsBackend + ?Sized> SettingsBackend for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }

    fn enumerate(&self) -> StoreResult<BTreeMap<String, Value>> {
        (**self).enumerate()
    }
}

impl<T: SettingsBackend + ?Sized> SettingsBackend for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }

    fn enumerate(&self) -> StoreResult<BTreeMap<String, Value>> {
        (**self).enumerate()
    }
}

/// Process-local backend; contents vanish when the process exits.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryBackend {
    /// Construct an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a backend pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl SettingsBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }

    fn enumerate(&self) -> StoreResult<BTreeMap<String, Value>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.clone())
    }
}
