//! JSON document backend that persists settings across restarts.
//!
//! # Design
//! - The whole document is one JSON object keyed by the stored option name.
//! - A missing file is an empty store, not an error.
//! - Writes land in a sibling temp file named per process and are renamed into place.
//! - Writers in one process are serialised; separate processes writing the same
//!   document can still lose each other's updates.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde_json::Value;
use tracing::debug;

use crate::backend::SettingsBackend;
use crate::error::{StoreError, StoreResult};

/// Settings backend stored as a JSON object on disk.
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileBackend {
    /// Open (lazily) the document at `path`; nothing is read until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<BTreeMap<String, Value>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    operation: "settings.load",
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        let document: Value =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Serialize {
                operation: "settings.load",
                source,
            })?;
        match document {
            Value::Object(map) => Ok(map.into_iter().collect()),
            Value::Null => Ok(BTreeMap::new()),
            _ => Err(StoreError::Corrupt {
                path: self.path.clone(),
                reason: "document root must be an object",
            }),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, Value>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                operation: "settings.create_dir",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let bytes = serde_json::to_vec_pretty(entries).map_err(|source| StoreError::Serialize {
            operation: "settings.persist",
            source,
        })?;
        let staging = self.staging_path();
        fs::write(&staging, bytes).map_err(|source| StoreError::Io {
            operation: "settings.write",
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &self.path).map_err(|source| StoreError::Io {
            operation: "settings.rename",
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), entries = entries.len(), "settings document persisted");
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }
}

impl SettingsBackend for JsonFileBackend {
    fn name(&self) -> &'static str {
        "json_file"
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    fn enumerate(&self) -> StoreResult<BTreeMap<String, Value>> {
        self.load()
    }
}
