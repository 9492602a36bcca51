//! Notebook and note domain model.
//!
//! # Responsibility
//! - Define the persisted tree: a store root owning notebooks owning notes.
//! - Keep the serialized form wire-compatible with the `notekeeperDB` JSON
//!   schema (camelCase keys, free-form note fields inlined next to the
//!   fixed ones).
//!
//! # Invariants
//! - `id` is stable and never reused for another entity.
//! - `Note::notebook_id` and `Note::posted_on` are fixed at creation.
//! - Reserved keys never appear in a note's free-form field map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Stable identifier for notebooks and notes.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// Free-form note content keyed by field name (`title`, `text`, `color`, ...).
pub type NoteFields = Map<String, Value>;

/// Keys owned by the store. Dropped from caller-supplied field maps so a
/// patch can never clobber an identity field.
const RESERVED_FIELD_KEYS: [&str; 3] = ["id", "notebookId", "postedOn"];

/// The whole persisted tree: every notebook and its notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRoot {
    /// Creation order. `Store::create_notebook` appends.
    pub notebooks: Vec<Notebook>,
}

/// Named container of notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Stable ID used for lookups and deletion.
    pub id: EntityId,
    /// Mutable display name.
    pub name: String,
    /// Newest first. `Store::create_note` prepends.
    pub notes: Vec<Note>,
}

impl Notebook {
    /// Creates an empty notebook with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an empty notebook with a caller-provided stable ID.
    ///
    /// Used by tests that need deterministic identities.
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            notes: Vec::new(),
        }
    }
}

/// A user-authored record owned by exactly one notebook.
///
/// Only identity and the creation stamp are structured; everything else the
/// caller supplies (`title`, `text`, `color`, ...) lives in `fields` and is
/// serialized inline, matching the original flat JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Stable ID used for lookups and deletion.
    pub id: EntityId,
    /// Owning notebook. Serialized as `notebookId` to match the on-disk schema.
    #[serde(rename = "notebookId")]
    pub notebook_id: EntityId,
    /// Creation time in Unix epoch milliseconds. Serialized as `postedOn`.
    #[serde(rename = "postedOn")]
    pub posted_on: i64,
    /// Caller-supplied content, fully mutable through `Store::update_note`.
    #[serde(flatten)]
    pub fields: NoteFields,
}

impl Note {
    /// Creates a note with a generated stable ID.
    ///
    /// Reserved keys in `fields` are discarded.
    pub fn new(notebook_id: EntityId, posted_on: i64, fields: NoteFields) -> Self {
        Self::with_id(Uuid::new_v4(), notebook_id, posted_on, fields)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by tests that need deterministic identities.
    pub fn with_id(
        id: EntityId,
        notebook_id: EntityId,
        posted_on: i64,
        fields: NoteFields,
    ) -> Self {
        Self {
            id,
            notebook_id,
            posted_on,
            fields: strip_reserved_keys(fields),
        }
    }

    /// Shallow-merges `patch` over the free-form fields.
    ///
    /// Matching keys are overwritten, missing keys are added, untouched keys
    /// survive. Reserved keys in the patch are ignored, so `id`,
    /// `notebookId` and `postedOn` always survive an update.
    pub fn merge_fields(&mut self, patch: NoteFields) {
        for (key, value) in strip_reserved_keys(patch) {
            self.fields.insert(key, value);
        }
    }

    /// Returns one free-form field by name.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

fn strip_reserved_keys(mut fields: NoteFields) -> NoteFields {
    for key in RESERVED_FIELD_KEYS {
        fields.remove(key);
    }
    fields
}
