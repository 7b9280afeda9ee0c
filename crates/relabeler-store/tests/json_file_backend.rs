use relabeler_store::{JsonFileBackend, OptionsPrefix, OptionsStore, SettingsBackend, StoreError};
use serde_json::json;

#[test]
fn overrides_survive_reopening_the_document() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("options.json");

    let store = OptionsStore::new(JsonFileBackend::new(&path), OptionsPrefix::new("tec-labels"));
    store.set("label_event_single", "Session")?;
    store.set("rewrite_view_slugs", true)?;
    drop(store);

    let reopened = OptionsStore::new(JsonFileBackend::new(&path), OptionsPrefix::new("tec-labels"));
    assert_eq!(reopened.get_text("label_event_single", "Event"), "Session");
    assert!(reopened.get_flag("rewrite_view_slugs", false));
    assert_eq!(reopened.get_all_options().len(), 2);
    assert!(!dir.path().join("nested").join("options.json.tmp").exists());
    Ok(())
}

#[test]
fn missing_document_reads_as_empty() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let backend = JsonFileBackend::new(dir.path().join("absent.json"));
    assert!(backend.enumerate()?.is_empty());
    assert_eq!(backend.get("anything")?, None);
    backend.delete("anything")?;
    assert!(!backend.path().exists());
    Ok(())
}

#[test]
fn non_object_document_is_reported_corrupt() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("options.json");
    std::fs::write(&path, "[1, 2, 3]")?;

    let backend = JsonFileBackend::new(&path);
    assert!(matches!(backend.enumerate(), Err(StoreError::Corrupt { .. })));

    let store = OptionsStore::new(backend, OptionsPrefix::default());
    assert_eq!(store.get_text("label_event_single", "Event"), "Event");
    assert!(store.get_all_options().is_empty());
    Ok(())
}

#[test]
fn unparsable_document_degrades_reads() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("options.json");
    std::fs::write(&path, "{ not json")?;

    let store = OptionsStore::new(JsonFileBackend::new(&path), OptionsPrefix::default());
    assert_eq!(store.get("label_venue_single", json!("Venue")), json!("Venue"));
    assert!(matches!(
        store.set("label_venue_single", "Hall"),
        Err(StoreError::Serialize { .. })
    ));
    Ok(())
}

#[test]
fn delete_rewrites_document_without_entry() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("options.json");
    std::fs::write(
        &path,
        r#"{"tec_labels_a": "1", "other_b": "2"}"#,
    )?;

    let store = OptionsStore::new(JsonFileBackend::new(&path), OptionsPrefix::new("tec-labels"));
    store.delete("a")?;

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path)?)?;
    assert_eq!(raw, json!({"other_b": "2"}));
    Ok(())
}
