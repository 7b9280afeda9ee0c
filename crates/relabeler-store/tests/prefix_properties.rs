//! Property tests for options prefix normalisation and prefix enumeration.

use std::collections::BTreeMap;

use proptest::prelude::*;
use relabeler_store::{MemoryBackend, OptionsPrefix, OptionsStore, normalize_prefix};
use serde_json::Value;

proptest! {
    #[test]
    fn normalisation_is_idempotent(raw in "[a-z_ -]{0,24}") {
        let once = normalize_prefix(&raw);
        prop_assert_eq!(normalize_prefix(&once), once);
    }

    #[test]
    fn prefix_ends_in_single_separator(raw in "[a-zA-Z0-9_-]{0,24}") {
        let prefix = normalize_prefix(&raw);
        prop_assert!(prefix.ends_with('_'));
        prop_assert!(!prefix.contains("__"));
        prop_assert!(!prefix.contains('-'));
    }

    #[test]
    fn prefixed_keys_stay_distinct(a in "[a-z_]{1,12}", b in "[a-z_]{1,12}") {
        prop_assume!(a != b);
        let prefix = OptionsPrefix::new("tec-labels");
        prop_assume!(!a.starts_with(prefix.as_str()) && !b.starts_with(prefix.as_str()));
        prop_assert_ne!(prefix.key(&a), prefix.key(&b));
    }

    #[test]
    fn enumeration_keeps_only_prefixed_entries(
        ours in proptest::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{0,8}", 0..8),
        theirs in proptest::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{0,8}", 0..8),
    ) {
        let mut entries: BTreeMap<String, Value> = BTreeMap::new();
        for (key, value) in &ours {
            entries.insert(format!("tec_labels_{key}"), Value::String(value.clone()));
        }
        for (key, value) in &theirs {
            entries.insert(format!("other_{key}"), Value::String(value.clone()));
        }
        let store = OptionsStore::new(
            MemoryBackend::with_entries(entries),
            OptionsPrefix::new("tec-labels"),
        );

        let listed = store.get_all_under_prefix("tec_labels_");
        prop_assert_eq!(listed.len(), ours.len());
        for (key, value) in &ours {
            prop_assert_eq!(listed.get(key), Some(&Value::String(value.clone())));
        }
    }
}
