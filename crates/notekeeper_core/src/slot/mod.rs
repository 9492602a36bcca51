//! Durable slot contracts for the persisted store root.
//!
//! # Responsibility
//! - Define the capability interface the store uses to load and save the
//!   serialized root.
//! - Keep backend details (SQLite) behind the trait boundary.
//!
//! # Invariants
//! - A slot holds at most one value: the whole serialized root.
//! - `load` returns `None` only when the slot has never been written.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::SqliteSlot;

pub type SlotResult<T> = Result<T, SlotError>;

/// Backend failure while reading or writing the slot.
#[derive(Debug)]
pub enum SlotError {
    Sqlite(rusqlite::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Capability interface for the single durable key-value slot.
///
/// Injected into the store so tests can substitute an in-memory backend.
pub trait DurableSlot {
    /// Reads the stored payload; `None` when the slot was never written.
    fn load(&self) -> SlotResult<Option<String>>;

    /// Replaces the stored payload.
    fn save(&self, payload: &str) -> SlotResult<()>;
}
