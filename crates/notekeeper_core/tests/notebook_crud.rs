use notekeeper_core::{SqliteSlot, Store, StoreError};
use uuid::Uuid;

fn open_store() -> Store<SqliteSlot> {
    let slot = SqliteSlot::open_in_memory().unwrap();
    Store::open(slot).unwrap()
}

#[test]
fn create_and_list_roundtrip() {
    let mut store = open_store();

    let notebook = store.create_notebook("Work").unwrap();
    assert_eq!(notebook.name, "Work");
    assert!(notebook.notes.is_empty());

    let listed = store.list_notebooks().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, notebook.id);
    assert_eq!(listed[0].name, "Work");
}

#[test]
fn create_assigns_fresh_ids_and_appends_in_creation_order() {
    let mut store = open_store();

    let first = store.create_notebook("first").unwrap();
    let second = store.create_notebook("second").unwrap();
    assert_ne!(first.id, second.id);

    let listed = store.list_notebooks().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}

#[test]
fn rename_updates_name_and_is_idempotent() {
    let mut store = open_store();
    let notebook = store.create_notebook("draft").unwrap();

    let renamed = store.rename_notebook(notebook.id, "Final").unwrap();
    assert_eq!(renamed.id, notebook.id);
    assert_eq!(renamed.name, "Final");

    let state_after_first = store.list_notebooks().unwrap();
    store.rename_notebook(notebook.id, "Final").unwrap();
    let state_after_second = store.list_notebooks().unwrap();
    assert_eq!(state_after_first, state_after_second);
}

#[test]
fn rename_missing_notebook_errors() {
    let mut store = open_store();
    let missing = Uuid::new_v4();

    let err = store.rename_notebook(missing, "anything").unwrap_err();
    assert!(matches!(err, StoreError::NotebookNotFound(id) if id == missing));
}

#[test]
fn delete_removes_only_the_target_notebook() {
    let mut store = open_store();
    let first = store.create_notebook("first").unwrap();
    let second = store.create_notebook("second").unwrap();

    store.delete_notebook(first.id).unwrap();

    let listed = store.list_notebooks().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, second.id);
}

#[test]
fn delete_missing_notebook_errors_and_leaves_state_intact() {
    let mut store = open_store();
    store.create_notebook("first").unwrap();
    store.create_notebook("second").unwrap();

    let missing = Uuid::new_v4();
    let err = store.delete_notebook(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotebookNotFound(id) if id == missing));

    // The last element must survive a delete aimed at an unknown id.
    assert_eq!(store.list_notebooks().unwrap().len(), 2);
}

#[test]
fn list_notes_missing_notebook_errors() {
    let mut store = open_store();
    let missing = Uuid::new_v4();

    let err = store.list_notes(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotebookNotFound(id) if id == missing));
}
