//! Selection of the configured settings backend.

use std::collections::BTreeMap;

use relabeler_config::StoreLocation;
use relabeler_store::{JsonFileBackend, MemoryBackend, SettingsBackend, StoreResult};
use serde_json::Value;
use tracing::debug;

/// Either of the built-in backends, chosen at runtime.
#[derive(Debug)]
pub enum AnyBackend {
    /// Process-local store.
    Memory(MemoryBackend),
    /// JSON document on disk.
    JsonFile(JsonFileBackend),
}

/// Build the backend named by `location`.
///
/// Opening never touches the disk; a missing document reads as empty.
#[must_use]
pub fn open_backend(location: &StoreLocation) -> AnyBackend {
    let backend = match location {
        StoreLocation::Memory => AnyBackend::Memory(MemoryBackend::new()),
        StoreLocation::JsonFile(path) => AnyBackend::JsonFile(JsonFileBackend::new(path.clone())),
    };
    debug!(backend = backend.name(), "settings backend selected");
    backend
}

impl AnyBackend {
    fn inner(&self) -> &dyn SettingsBackend {
        match self {
            Self::Memory(backend) => backend,
            Self::JsonFile(backend) => backend,
        }
    }
}

impl SettingsBackend for AnyBackend {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        self.inner().get(key)
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        self.inner().set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.inner().delete(key)
    }

    fn enumerate(&self) -> StoreResult<BTreeMap<String, Value>> {
        self.inner().enumerate()
    }
}
