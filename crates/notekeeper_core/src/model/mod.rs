//! Domain model for the notekeeper store.
//!
//! # Responsibility
//! - Define the canonical data structures persisted in the durable slot.
//! - Keep one tree-shaped store root as the single persisted unit.
//!
//! # Invariants
//! - Every domain object is identified by a stable `EntityId`.
//! - Deletion is a hard removal from the owning sequence.

pub mod notebook;
