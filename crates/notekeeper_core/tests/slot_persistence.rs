use notekeeper_core::{DurableSlot, NoteFields, SqliteSlot, Store, StoreError, StoreRoot};
use serde_json::{json, Value};

fn fields(value: Value) -> NoteFields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object literal, got {other}"),
    }
}

#[test]
fn opening_a_blank_slot_seeds_an_empty_root() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notekeeper.db");

    let store = Store::open(SqliteSlot::open(&path).unwrap()).unwrap();
    drop(store);

    let slot = SqliteSlot::open(&path).unwrap();
    let payload = slot
        .load()
        .unwrap()
        .expect("open should have flushed an initial root");
    let root: StoreRoot = serde_json::from_str(&payload).unwrap();
    assert!(root.notebooks.is_empty());
}

#[test]
fn reopening_a_file_slot_preserves_observable_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notekeeper.db");

    let mut store = Store::open(SqliteSlot::open(&path).unwrap()).unwrap();
    let notebook = store.create_notebook("Work").unwrap();
    let first = store
        .create_note(notebook.id, fields(json!({"title": "N1"})))
        .unwrap();
    store
        .create_note(notebook.id, fields(json!({"title": "N2", "color": "red"})))
        .unwrap();
    store.rename_notebook(notebook.id, "Work (renamed)").unwrap();
    store.delete_note(notebook.id, first.id).unwrap();
    let state_before = store.list_notebooks().unwrap();
    drop(store);

    let mut reopened = Store::open(SqliteSlot::open(&path).unwrap()).unwrap();
    let state_after = reopened.list_notebooks().unwrap();
    assert_eq!(state_before, state_after);

    let notes = reopened.list_notes(notebook.id).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].field("title"), Some(&json!("N2")));
    assert_eq!(notes[0].field("color"), Some(&json!("red")));
}

#[test]
fn malformed_slot_payload_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notekeeper.db");

    let slot = SqliteSlot::open(&path).unwrap();
    slot.save("not json at all").unwrap();
    drop(slot);

    // Open succeeds: a non-blank slot is not parsed until the first refresh.
    let mut store = Store::open(SqliteSlot::open(&path).unwrap()).unwrap();
    let err = store.list_notebooks().unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
}

#[test]
fn stores_sharing_a_slot_observe_each_others_flushes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notekeeper.db");

    let mut store_a = Store::open(SqliteSlot::open(&path).unwrap()).unwrap();
    let mut store_b = Store::open(SqliteSlot::open(&path).unwrap()).unwrap();

    let from_a = store_a.create_notebook("from a").unwrap();
    // b refreshes before mutating, so a's notebook survives b's flush.
    let from_b = store_b.create_notebook("from b").unwrap();

    let listed = store_a.list_notebooks().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, from_a.id);
    assert_eq!(listed[1].id, from_b.id);
}
