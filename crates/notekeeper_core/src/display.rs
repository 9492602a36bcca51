//! Presentation helpers for greeting and relative-time text.
//!
//! # Responsibility
//! - Produce display strings for UI callers (CLI, future front ends).
//! - Stay pure: callers pass clock values in.
//!
//! # Invariants
//! - Nothing here reads or writes persisted state.

/// Period-of-day salutation for an hour value in the 0-23 range.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=4 => "Good Night",
        5..=11 => "Good Morning",
        12..=14 => "Good Noon",
        15..=16 => "Good Afternoon",
        17..=19 => "Good Evening",
        _ => "Good Night",
    }
}

/// Formats a creation timestamp relative to `now_ms`.
///
/// Buckets floor toward the larger unit: under a minute is "Just now",
/// then minutes up to an hour, hours up to a day, days beyond that.
pub fn relative_time(posted_on_ms: i64, now_ms: i64) -> String {
    let minutes = (now_ms - posted_on_ms) / 1000 / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if hours < 24 {
        format!("{hours} hour ago")
    } else {
        format!("{days} day ago")
    }
}
