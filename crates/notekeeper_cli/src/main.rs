//! CLI probe for the notekeeper core.
//!
//! # Responsibility
//! - Exercise the core crate end to end: open a slot, list its content.
//! - Keep output deterministic for quick local sanity checks.

use notekeeper_core::{greeting, relative_time, SqliteSlot, Store};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() -> ExitCode {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "notekeeper.db".to_string());

    let slot = match SqliteSlot::open(&db_path) {
        Ok(slot) => slot,
        Err(err) => {
            eprintln!("failed to open slot `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = match Store::open(slot) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to open store: {err}");
            return ExitCode::FAILURE;
        }
    };

    let now_ms = now_epoch_ms();
    println!("{} (notekeeper {})", greeting(utc_hour(now_ms)), notekeeper_core::core_version());

    let notebooks = match store.list_notebooks() {
        Ok(notebooks) => notebooks,
        Err(err) => {
            eprintln!("failed to list notebooks: {err}");
            return ExitCode::FAILURE;
        }
    };

    if notebooks.is_empty() {
        println!("no notebooks yet");
        return ExitCode::SUCCESS;
    }

    for notebook in notebooks {
        println!("{} ({} notes)", notebook.name, notebook.notes.len());
        for note in &notebook.notes {
            let title = note
                .field("title")
                .and_then(|value| value.as_str())
                .unwrap_or("(untitled)");
            println!("  - {title} [{}]", relative_time(note.posted_on, now_ms));
        }
    }

    ExitCode::SUCCESS
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

fn utc_hour(epoch_ms: i64) -> u32 {
    ((epoch_ms / 3_600_000).rem_euclid(24)) as u32
}
