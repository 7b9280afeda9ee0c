//! Fake backends for failure and call-count scenarios.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use relabeler_store::{SettingsBackend, StoreError, StoreResult};
use serde_json::Value;

/// Backend that fails every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableBackend;

impl UnavailableBackend {
    fn error() -> StoreError {
        StoreError::Unavailable {
            backend: "unavailable",
            reason: "store offline".to_string(),
        }
    }
}

impl SettingsBackend for UnavailableBackend {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn get(&self, _key: &str) -> StoreResult<Option<Value>> {
        Err(Self::error())
    }

    fn set(&self, _key: &str, _value: Value) -> StoreResult<()> {
        Err(Self::error())
    }

    fn delete(&self, _key: &str) -> StoreResult<()> {
        Err(Self::error())
    }

    fn enumerate(&self) -> StoreResult<BTreeMap<String, Value>> {
        Err(Self::error())
    }
}

/// Wraps a backend and counts single-key reads.
#[derive(Debug, Default)]
pub struct CountingBackend<B> {
    inner: B,
    reads: AtomicUsize,
}

impl<B> CountingBackend<B> {
    /// Count reads against `inner`.
    #[must_use]
    pub const fn new(inner: B) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of `get` calls observed so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl<B: SettingsBackend> SettingsBackend for CountingBackend<B> {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.inner.delete(key)
    }

    fn enumerate(&self) -> StoreResult<BTreeMap<String, Value>> {
        self.inner.enumerate()
    }
}
