//! Persistence store for notebooks and notes.
//!
//! # Responsibility
//! - Own the in-memory mirror of the persisted store root.
//! - Run every public operation as refresh, locate, mutate, flush.
//! - Map missing IDs to explicit not-found errors.
//!
//! # Invariants
//! - Every operation starts by refreshing the mirror from the slot.
//! - Mutating operations flush the whole root before returning.
//! - `id`, `notebookId` and `postedOn` survive any note update.
//! - A failed locate leaves the slot content unchanged.

use crate::lookup::{
    find_note_index, find_note_mut, find_notebook, find_notebook_index, find_notebook_mut,
};
use crate::model::notebook::{EntityId, Note, NoteFields, Notebook, StoreRoot};
use crate::slot::{DurableSlot, SlotError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation error.
#[derive(Debug)]
pub enum StoreError {
    /// Operation referenced a notebook ID with no matching notebook.
    NotebookNotFound(EntityId),
    /// Operation referenced a note ID with no matching note.
    NoteNotFound(EntityId),
    /// Slot content could not be parsed or the root could not be encoded.
    Serialization(serde_json::Error),
    /// Durable backend failure.
    Slot(SlotError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotebookNotFound(id) => write!(f, "notebook not found: {id}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Serialization(err) => write!(f, "malformed slot payload: {err}"),
            Self::Slot(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotebookNotFound(_) => None,
            Self::NoteNotFound(_) => None,
            Self::Serialization(err) => Some(err),
            Self::Slot(err) => Some(err),
        }
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Slot(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// CRUD surface over the store root, backed by an injected durable slot.
///
/// Results are owned snapshots of the mirror, never live references into it.
pub struct Store<S: DurableSlot> {
    slot: S,
    root: StoreRoot,
}

impl<S: DurableSlot> Store<S> {
    /// Opens the store, seeding an empty root when the slot is blank.
    ///
    /// An existing payload is left untouched here; the per-operation refresh
    /// parses it on first use, so a corrupt slot surfaces there.
    pub fn open(slot: S) -> StoreResult<Self> {
        let mut store = Self {
            slot,
            root: StoreRoot::default(),
        };

        if store.slot.load()?.is_none() {
            store.flush()?;
            info!("event=store_init module=store status=ok seeded=true");
        }

        Ok(store)
    }

    /// Creates a notebook with the given display name, appended to the end
    /// of the notebook sequence.
    pub fn create_notebook(&mut self, name: impl Into<String>) -> StoreResult<Notebook> {
        self.refresh()?;

        let notebook = Notebook::new(name);
        self.root.notebooks.push(notebook.clone());

        self.flush()?;
        Ok(notebook)
    }

    /// Creates a note inside the given notebook.
    ///
    /// The note is stamped with the current wall-clock time and prepended,
    /// keeping the notebook's sequence newest-first.
    pub fn create_note(&mut self, notebook_id: EntityId, fields: NoteFields) -> StoreResult<Note> {
        self.refresh()?;

        let notebook = find_notebook_mut(&mut self.root, notebook_id)
            .ok_or(StoreError::NotebookNotFound(notebook_id))?;
        let note = Note::new(notebook_id, now_epoch_ms(), fields);
        notebook.notes.insert(0, note.clone());

        self.flush()?;
        Ok(note)
    }

    /// Lists every notebook in creation order.
    pub fn list_notebooks(&mut self) -> StoreResult<Vec<Notebook>> {
        self.refresh()?;
        Ok(self.root.notebooks.clone())
    }

    /// Lists one notebook's notes, newest first.
    pub fn list_notes(&mut self, notebook_id: EntityId) -> StoreResult<Vec<Note>> {
        self.refresh()?;

        let notebook = find_notebook(&self.root, notebook_id)
            .ok_or(StoreError::NotebookNotFound(notebook_id))?;
        Ok(notebook.notes.clone())
    }

    /// Renames a notebook.
    pub fn rename_notebook(
        &mut self,
        notebook_id: EntityId,
        name: impl Into<String>,
    ) -> StoreResult<Notebook> {
        self.refresh()?;

        let notebook = find_notebook_mut(&mut self.root, notebook_id)
            .ok_or(StoreError::NotebookNotFound(notebook_id))?;
        notebook.name = name.into();
        let renamed = notebook.clone();

        self.flush()?;
        Ok(renamed)
    }

    /// Shallow-merges `fields` into an existing note, located anywhere in
    /// the tree.
    pub fn update_note(&mut self, note_id: EntityId, fields: NoteFields) -> StoreResult<Note> {
        self.refresh()?;

        let note =
            find_note_mut(&mut self.root, note_id).ok_or(StoreError::NoteNotFound(note_id))?;
        note.merge_fields(fields);
        let updated = note.clone();

        self.flush()?;
        Ok(updated)
    }

    /// Deletes a notebook and every note it owns.
    pub fn delete_notebook(&mut self, notebook_id: EntityId) -> StoreResult<()> {
        self.refresh()?;

        let index = find_notebook_index(&self.root, notebook_id)
            .ok_or(StoreError::NotebookNotFound(notebook_id))?;
        self.root.notebooks.remove(index);

        self.flush()
    }

    /// Deletes one note from the given notebook and returns the remaining
    /// note sequence.
    pub fn delete_note(
        &mut self,
        notebook_id: EntityId,
        note_id: EntityId,
    ) -> StoreResult<Vec<Note>> {
        self.refresh()?;

        let notebook = find_notebook_mut(&mut self.root, notebook_id)
            .ok_or(StoreError::NotebookNotFound(notebook_id))?;
        let index = find_note_index(notebook, note_id).ok_or(StoreError::NoteNotFound(note_id))?;
        notebook.notes.remove(index);
        let remaining = notebook.notes.clone();

        self.flush()?;
        Ok(remaining)
    }

    /// Re-reads the mirror from the slot.
    ///
    /// A blank slot resets the mirror to an empty root; malformed content
    /// fails fast with no partial recovery.
    fn refresh(&mut self) -> StoreResult<()> {
        self.root = match self.slot.load()? {
            Some(payload) => serde_json::from_str(&payload)?,
            None => StoreRoot::default(),
        };
        Ok(())
    }

    /// Serializes the whole root and writes it to the slot synchronously.
    fn flush(&mut self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.root)?;
        self.slot.save(&payload)?;
        Ok(())
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
