//! Seeded settings stores.

use relabeler_store::{MemoryBackend, OptionsPrefix, OptionsStore};
use serde_json::Value;

/// Identifier used by fixtures; normalises to `tec_labels_`.
pub const TEST_BASE_ID: &str = "tec-labels";

/// In-memory backend holding `entries` under the [`TEST_BASE_ID`] prefix.
///
/// Keys are given without the prefix.
#[must_use]
pub fn seeded_backend<'a, I>(entries: I) -> MemoryBackend
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    let prefix = OptionsPrefix::new(TEST_BASE_ID);
    MemoryBackend::with_entries(
        entries
            .into_iter()
            .map(|(key, value)| (prefix.key(key), value)),
    )
}

/// Options store over [`seeded_backend`].
#[must_use]
pub fn seeded_options<'a, I>(entries: I) -> OptionsStore<MemoryBackend>
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    OptionsStore::new(seeded_backend(entries), OptionsPrefix::new(TEST_BASE_ID))
}

#[cfg(test)]
mod tests {
    use super::*;
    use relabeler_store::SettingsBackend;
    use serde_json::json;

    #[test]
    fn seeded_keys_are_prefixed_once() {
        let backend = seeded_backend([
            ("label_event_single", json!("Session")),
            ("tec_labels_label_venue_single", json!("Hall")),
        ]);
        let entries = backend.enumerate().unwrap_or_default();
        let keys: Vec<_> = entries.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["tec_labels_label_event_single", "tec_labels_label_venue_single"]
        );
    }

    #[test]
    fn seeded_options_read_short_keys() {
        let options = seeded_options([("label_event_plural", json!("Sessions"))]);
        assert_eq!(options.get_text("label_event_plural", "Events"), "Sessions");
    }
}
