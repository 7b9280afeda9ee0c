//! Label resolution with a process-lifetime cache.
//!
//! # Design
//! - Cache keys are the prefixed storage keys, so one resolver can never mix namespaces.
//! - Entries are write-once: the first resolved value sticks for the life of the process,
//!   so repeated renders of one term within a request stay consistent.
//! - The store is consulted at most once per key; concurrent first lookups may both read,
//!   but only the first insert is kept.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use relabeler_hooks::ViewDescriptor;
use relabeler_store::{OptionsStore, SettingsBackend, StoreResult};
use tracing::debug;

use crate::fields::REWRITE_VIEW_SLUGS;
use crate::keys::{Capabilities, LabelKey};
use crate::views::relabel_views;

/// Resolves label keys to their effective text.
#[derive(Debug)]
pub struct LabelResolver<B> {
    options: OptionsStore<B>,
    cache: RwLock<HashMap<String, String>>,
}

impl<B: SettingsBackend> LabelResolver<B> {
    /// Construct a resolver with an empty cache.
    #[must_use]
    pub fn new(options: OptionsStore<B>) -> Self {
        Self {
            options,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Options store the resolver reads from.
    #[must_use]
    pub const fn options(&self) -> &OptionsStore<B> {
        &self.options
    }

    /// Storage (and cache) key for `key`: the prefix joined to the key.
    #[must_use]
    pub fn prefixed_key(&self, key: LabelKey) -> String {
        self.options.prefix().join(key.as_str())
    }

    /// Effective text for `key`: the stored override, else `host_default`.
    ///
    /// Once resolved, the value is returned from cache for the rest of the
    /// process even if the store changes.
    #[must_use]
    pub fn resolve(&self, key: LabelKey, host_default: &str) -> String {
        let storage_key = self.prefixed_key(key);
        if let Some(value) = self.read_cache().get(&storage_key) {
            return value.clone();
        }

        let value = self.options.get_text_at(&storage_key, host_default);
        debug!(key = %storage_key, "label cache miss");
        self.write_cache()
            .entry(storage_key)
            .or_insert(value)
            .clone()
    }

    /// Resolve `key` against its built-in default text.
    #[must_use]
    pub fn resolve_default(&self, key: LabelKey) -> String {
        self.resolve(key, key.default_text())
    }

    /// Cached value for `key`, if it has been resolved.
    #[must_use]
    pub fn cached(&self, key: LabelKey) -> Option<String> {
        self.read_cache().get(&self.prefixed_key(key)).cloned()
    }

    /// Number of resolved keys.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.read_cache().len()
    }

    /// Whether view slugs should follow the relabeled view names.
    ///
    /// Read from the store on every call; the rewrite itself is the host's job.
    #[must_use]
    pub fn rewrite_view_slugs(&self) -> bool {
        self.options.get_flag_at(&self.toggle_key(), false)
    }

    /// Store an override for `key`. Already-resolved values are not refreshed.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    pub fn store_override(&self, key: LabelKey, value: &str) -> StoreResult<()> {
        self.options.set_at(&self.prefixed_key(key), value)
    }

    /// Remove the override for `key`; absent overrides are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    pub fn remove_override(&self, key: LabelKey) -> StoreResult<()> {
        self.options.delete_at(&self.prefixed_key(key))
    }

    /// Store the view-slug rewrite toggle.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    pub fn store_rewrite_view_slugs(&self, enabled: bool) -> StoreResult<()> {
        self.options.set_at(&self.toggle_key(), enabled)
    }

    /// Remove the view-slug rewrite toggle.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    pub fn remove_rewrite_view_slugs(&self) -> StoreResult<()> {
        self.options.delete_at(&self.toggle_key())
    }

    /// Replace view-selector captions that match a canonical view name.
    ///
    /// Entries with unrecognised captions pass through; order is preserved.
    #[must_use]
    pub fn relabel_views(
        &self,
        views: Vec<ViewDescriptor>,
        capabilities: Capabilities,
    ) -> Vec<ViewDescriptor> {
        relabel_views(views, |anchor| {
            LabelKey::from_view_anchor(anchor, capabilities).map(|key| self.resolve(key, anchor))
        })
    }

    fn toggle_key(&self) -> String {
        self.options.prefix().join(REWRITE_VIEW_SLUGS)
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relabeler_store::{MemoryBackend, OptionsPrefix, StoreResult};
    use serde_json::json;

    fn resolver_with(entries: Vec<(&str, serde_json::Value)>) -> LabelResolver<MemoryBackend> {
        LabelResolver::new(OptionsStore::new(
            MemoryBackend::with_entries(entries),
            OptionsPrefix::new("tec-labels"),
        ))
    }

    #[test]
    fn stored_override_replaces_host_default() {
        let resolver = resolver_with(vec![("tec_labels_label_event_single", json!("Session"))]);
        assert_eq!(resolver.resolve(LabelKey::EventSingle, "Event"), "Session");
    }

    #[test]
    fn missing_override_returns_host_default_unchanged() {
        let resolver = resolver_with(Vec::new());
        assert_eq!(resolver.resolve(LabelKey::EventSingle, "Event"), "Event");
        assert_eq!(resolver.resolve(LabelKey::VenuePlural, "Locations"), "Locations");
    }

    #[test]
    fn resolved_value_is_stable_after_store_changes() -> StoreResult<()> {
        let resolver = resolver_with(vec![("tec_labels_label_venue_single", json!("Hall"))]);
        assert_eq!(resolver.resolve(LabelKey::VenueSingle, "Venue"), "Hall");

        resolver.store_override(LabelKey::VenueSingle, "Room")?;
        resolver.remove_override(LabelKey::VenueSingle)?;
        assert_eq!(resolver.resolve(LabelKey::VenueSingle, "Venue"), "Hall");
        assert_eq!(resolver.resolve(LabelKey::VenueSingle, "Other"), "Hall");
        Ok(())
    }

    #[test]
    fn cache_is_keyed_by_prefixed_key() {
        let resolver = resolver_with(Vec::new());
        assert_eq!(resolver.cached(LabelKey::DayView), None);
        let _ = resolver.resolve_default(LabelKey::DayView);
        assert_eq!(resolver.cached(LabelKey::DayView).as_deref(), Some("Day"));
        assert_eq!(resolver.prefixed_key(LabelKey::DayView), "tec_labels_label_day_view");
        assert_eq!(resolver.cache_len(), 1);
    }

    #[test]
    fn rewrite_view_slugs_reads_toggle() -> StoreResult<()> {
        let resolver = resolver_with(Vec::new());
        assert!(!resolver.rewrite_view_slugs());
        resolver.store_rewrite_view_slugs(true)?;
        assert!(resolver.rewrite_view_slugs());
        resolver.remove_rewrite_view_slugs()?;
        assert!(!resolver.rewrite_view_slugs());
        Ok(())
    }

    #[test]
    fn base_id_matching_key_stem_still_prefixes() -> StoreResult<()> {
        let resolver = LabelResolver::new(OptionsStore::new(
            MemoryBackend::with_entries([("label_label_event_single", json!("Session"))]),
            OptionsPrefix::new("label"),
        ));
        assert_eq!(resolver.prefixed_key(LabelKey::EventSingle), "label_label_event_single");
        assert_eq!(resolver.resolve(LabelKey::EventSingle, "Event"), "Session");

        resolver.store_override(LabelKey::VenueSingle, "Hall")?;
        assert_eq!(
            resolver.options().backend().get("label_label_venue_single")?,
            Some(json!("Hall"))
        );
        assert_eq!(resolver.resolve(LabelKey::VenueSingle, "Venue"), "Hall");
        Ok(())
    }

    #[test]
    fn view_selector_substitutes_only_known_anchors() {
        let resolver = resolver_with(vec![("tec_labels_label_list_view", json!("Happenings"))]);
        let views = vec![
            ViewDescriptor::new("list", "List", "/events/list/"),
            ViewDescriptor::new("custom", "Foo", "/events/foo/"),
            ViewDescriptor::new("week", "Week", "/events/week/"),
        ];

        let relabeled = resolver.relabel_views(views, Capabilities::default());
        let anchors: Vec<_> = relabeled.iter().map(|view| view.anchor.as_str()).collect();
        assert_eq!(anchors, vec!["Happenings", "Foo", "Week"]);
        assert_eq!(relabeled[0].url, "/events/list/");
    }
}
