//! SQLite-backed durable slot.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for slot storage.
//! - Bootstrap the `slot` table before returning a usable handle.
//! - Keep the serialized root under one fixed key.
//!
//! # Invariants
//! - Returned slots have the `slot` table created.
//! - Writes upsert, so the fixed key never has more than one row.

use super::{DurableSlot, SlotResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Fixed key of the single slot row, matching the original storage key.
const SLOT_KEY: &str = "notekeeperDB";

const SLOT_SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS slot (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);";

/// Durable slot persisted in a SQLite database.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    /// Opens a slot database file and bootstraps the slot table.
    ///
    /// # Side effects
    /// - Emits `slot_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> SlotResult<Self> {
        let started_at = Instant::now();
        info!("event=slot_open module=slot status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=slot_open module=slot status=error mode=file duration_ms={} error_code=slot_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, "file", started_at)
    }

    /// Opens an in-memory slot.
    ///
    /// Serves as the test double for store tests; the content dies with the
    /// connection.
    pub fn open_in_memory() -> SlotResult<Self> {
        let started_at = Instant::now();
        info!("event=slot_open module=slot status=start mode=memory");

        let conn = match Connection::open_in_memory() {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=slot_open module=slot status=error mode=memory duration_ms={} error_code=slot_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, "memory", started_at)
    }

    fn bootstrap(conn: Connection, mode: &str, started_at: Instant) -> SlotResult<Self> {
        if let Err(err) = conn
            .busy_timeout(Duration::from_secs(5))
            .and_then(|()| conn.execute_batch(SLOT_SCHEMA_SQL))
        {
            error!(
                "event=slot_open module=slot status=error mode={mode} duration_ms={} error_code=slot_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }

        info!(
            "event=slot_open module=slot status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(Self { conn })
    }
}

impl DurableSlot for SqliteSlot {
    fn load(&self) -> SlotResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slot WHERE key = ?1;", [SLOT_KEY], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&self, payload: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO slot (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![SLOT_KEY, payload],
        )?;
        Ok(())
    }
}
