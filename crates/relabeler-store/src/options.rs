//! Prefix-scoped adapter over a [`SettingsBackend`].
//!
//! # Design
//! - Reads never fail: a missing key or an unreachable backend yields the caller's default.
//! - Writes surface backend errors so operators learn their change did not land.
//! - Short-key helpers prefix exactly once, so callers may pass short or full keys.
//! - The `*_at` variants take the full storage key and never re-prefix it.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::backend::SettingsBackend;
use crate::error::StoreResult;
use crate::prefix::OptionsPrefix;

/// Settings access scoped to one options prefix.
#[derive(Debug)]
pub struct OptionsStore<B> {
    backend: B,
    prefix: OptionsPrefix,
}

impl<B: SettingsBackend> OptionsStore<B> {
    /// Wrap `backend`, namespacing every key with `prefix`.
    #[must_use]
    pub const fn new(backend: B, prefix: OptionsPrefix) -> Self {
        Self { backend, prefix }
    }

    /// Prefix applied to every key.
    #[must_use]
    pub const fn prefix(&self) -> &OptionsPrefix {
        &self.prefix
    }

    /// Underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Stored value for `key`, or `default` when absent or unreadable.
    ///
    /// An explicitly stored empty string counts as present.
    #[must_use]
    pub fn get(&self, key: &str, default: Value) -> Value {
        self.lookup_at(&self.prefix.key(key)).unwrap_or(default)
    }

    /// Stored text for `key`, or `default`.
    ///
    /// Numbers and booleans are rendered as text; `null`, arrays, and objects
    /// are treated as absent.
    #[must_use]
    pub fn get_text(&self, key: &str, default: &str) -> String {
        self.get_text_at(&self.prefix.key(key), default)
    }

    /// Stored text under the full `storage_key`, or `default`.
    #[must_use]
    pub fn get_text_at(&self, storage_key: &str, default: &str) -> String {
        self.lookup_at(storage_key)
            .and_then(text_value)
            .unwrap_or_else(|| default.to_string())
    }

    /// Stored toggle for `key`, or `default`.
    #[must_use]
    pub fn get_flag(&self, key: &str, default: bool) -> bool {
        self.get_flag_at(&self.prefix.key(key), default)
    }

    /// Stored toggle under the full `storage_key`, or `default`.
    #[must_use]
    pub fn get_flag_at(&self, storage_key: &str, default: bool) -> bool {
        self.lookup_at(storage_key)
            .and_then(flag_value)
            .unwrap_or(default)
    }

    /// Every entry whose storage key starts with `prefix`, with the prefix stripped.
    ///
    /// Returns an empty map when the backend is unavailable.
    #[must_use]
    pub fn get_all_under_prefix(&self, prefix: &str) -> BTreeMap<String, Value> {
        self.enumerate()
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(prefix)
                    .map(|short| (short.to_string(), value))
            })
            .collect()
    }

    /// All of this extension's options keyed without the prefix.
    #[must_use]
    pub fn get_all_options(&self) -> BTreeMap<String, Value> {
        self.get_all_under_prefix(self.prefix.as_str())
    }

    /// All of this extension's options keyed by their full storage key.
    #[must_use]
    pub fn get_all_raw_options(&self) -> BTreeMap<String, Value> {
        self.enumerate()
            .into_iter()
            .filter(|(key, _)| key.starts_with(self.prefix.as_str()))
            .collect()
    }

    /// Store `value` under the prefixed `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> StoreResult<()> {
        self.set_at(&self.prefix.key(key), value)
    }

    /// Store `value` under the full `storage_key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    pub fn set_at(&self, storage_key: &str, value: impl Into<Value>) -> StoreResult<()> {
        self.backend.set(storage_key, value.into())?;
        debug!(key = %storage_key, "option stored");
        Ok(())
    }

    /// Remove the prefixed `key`; absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    pub fn delete(&self, key: &str) -> StoreResult<()> {
        self.delete_at(&self.prefix.key(key))
    }

    /// Remove the full `storage_key`; absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    pub fn delete_at(&self, storage_key: &str) -> StoreResult<()> {
        self.backend.delete(storage_key)?;
        debug!(key = %storage_key, "option deleted");
        Ok(())
    }

    fn lookup_at(&self, key: &str) -> Option<Value> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    error = %err,
                    key = %key,
                    backend = self.backend.name(),
                    "settings read failed; falling back to default"
                );
                None
            }
        }
    }

    fn enumerate(&self) -> BTreeMap<String, Value> {
        self.backend.enumerate().unwrap_or_else(|err| {
            warn!(
                error = %err,
                backend = self.backend.name(),
                "settings enumeration failed; treating store as empty"
            );
            BTreeMap::new()
        })
    }
}

fn text_value(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn flag_value(value: Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(flag),
        Value::String(text) => Some(matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )),
        Value::Number(number) => number.as_f64().map(|n| n != 0.0),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
