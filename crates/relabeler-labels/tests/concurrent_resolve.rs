//! First lookups racing across threads on one shared resolver.

use std::sync::Arc;
use std::thread;

use anyhow::{Result, anyhow};
use relabeler_labels::{LabelKey, LabelResolver};
use relabeler_store::{MemoryBackend, OptionsPrefix, OptionsStore};
use relabeler_test_support::{CountingBackend, TEST_BASE_ID, seeded_backend};
use serde_json::json;

const THREADS: usize = 8;

type SharedResolver = Arc<LabelResolver<CountingBackend<MemoryBackend>>>;

fn shared_resolver(backend: MemoryBackend) -> SharedResolver {
    Arc::new(LabelResolver::new(OptionsStore::new(
        CountingBackend::new(backend),
        OptionsPrefix::new(TEST_BASE_ID),
    )))
}

fn resolve_on_threads<F>(resolver: &SharedResolver, host_default: F) -> Result<Vec<String>>
where
    F: Fn(usize) -> String + Sync,
{
    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|index| {
                let resolver = Arc::clone(resolver);
                let host_default = &host_default;
                scope.spawn(move || {
                    resolver.resolve(LabelKey::EventSingle, &host_default(index))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("resolver thread panicked")))
            .collect()
    })
}

#[test]
fn racing_lookups_agree_on_the_stored_override() -> Result<()> {
    let resolver = shared_resolver(seeded_backend([("label_event_single", json!("Session"))]));

    let values = resolve_on_threads(&resolver, |_| "Event".to_string())?;

    assert_eq!(values.len(), THREADS);
    assert!(values.iter().all(|value| value == "Session"));
    assert_eq!(resolver.cache_len(), 1);
    assert!(resolver.options().backend().reads() <= THREADS);
    assert_eq!(resolver.resolve(LabelKey::EventSingle, "Event"), "Session");
    Ok(())
}

#[test]
fn racing_defaults_keep_a_single_first_value() -> Result<()> {
    let resolver = shared_resolver(MemoryBackend::new());

    let values = resolve_on_threads(&resolver, |index| format!("Event {index}"))?;

    let first = resolver
        .cached(LabelKey::EventSingle)
        .ok_or_else(|| anyhow!("nothing cached after resolution"))?;
    assert!(values.iter().all(|value| *value == first));
    assert_eq!(resolver.cache_len(), 1);
    assert!(resolver.options().backend().reads() <= THREADS);
    Ok(())
}
