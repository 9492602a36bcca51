//! Lookup helpers over a store-root snapshot.
//!
//! # Responsibility
//! - Locate notebooks and notes by stable ID with plain linear scans.
//! - Stay free of I/O so the store can run them on any snapshot.
//!
//! # Invariants
//! - Read lookups never mutate the snapshot they scan.
//! - A missing ID is reported as `None`, never as a sentinel index.

use crate::model::notebook::{EntityId, Note, Notebook, StoreRoot};

/// Finds a notebook by ID within the root sequence.
pub fn find_notebook(root: &StoreRoot, notebook_id: EntityId) -> Option<&Notebook> {
    root.notebooks
        .iter()
        .find(|notebook| notebook.id == notebook_id)
}

/// Mutable variant of [`find_notebook`].
pub fn find_notebook_mut(root: &mut StoreRoot, notebook_id: EntityId) -> Option<&mut Notebook> {
    root.notebooks
        .iter_mut()
        .find(|notebook| notebook.id == notebook_id)
}

/// Position of a notebook within the root sequence.
pub fn find_notebook_index(root: &StoreRoot, notebook_id: EntityId) -> Option<usize> {
    root.notebooks
        .iter()
        .position(|notebook| notebook.id == notebook_id)
}

/// Finds a note anywhere in the tree, scanning notebooks in order and notes
/// within each notebook in order.
pub fn find_note(root: &StoreRoot, note_id: EntityId) -> Option<&Note> {
    root.notebooks
        .iter()
        .flat_map(|notebook| notebook.notes.iter())
        .find(|note| note.id == note_id)
}

/// Mutable variant of [`find_note`].
pub fn find_note_mut(root: &mut StoreRoot, note_id: EntityId) -> Option<&mut Note> {
    root.notebooks
        .iter_mut()
        .flat_map(|notebook| notebook.notes.iter_mut())
        .find(|note| note.id == note_id)
}

/// Position of a note within one notebook's sequence.
pub fn find_note_index(notebook: &Notebook, note_id: EntityId) -> Option<usize> {
    notebook.notes.iter().position(|note| note.id == note_id)
}
