//! Log view construction.
//!
//! Turns a user and its resolved exercises into the log payload returned
//! to clients: an optional inclusive date window, an optional entry cap,
//! and a projection of each exercise with the date rendered human-readable.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates;
use crate::models::{Exercise, User, UserId};

/// Log window options from the query string. All fields optional; the
/// default is the full log.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Inclusive lower bound on the exercise date
    pub from: Option<NaiveDate>,

    /// Inclusive upper bound on the exercise date
    pub to: Option<NaiveDate>,

    /// Maximum number of entries to return
    pub limit: Option<usize>,
}

/// One log line: a read projection of an Exercise.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: u32,
    /// Human-readable date, e.g. "Mon Jan 01 2024"
    pub date: String,
}

/// The full log payload for a user.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub id: UserId,
    pub username: String,
    /// Number of entries in `log`, after filtering
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// Build the ordered log view for a user.
///
/// `exercises` must already be resolved from the user's reference list;
/// their order (logging order) is preserved. Filtering happens on the
/// canonical date, truncation after filtering, and `count` reflects the
/// entries actually returned.
pub fn build_log(user: &User, exercises: &[Exercise], options: &LogOptions) -> LogResponse {
    let log: Vec<LogEntry> = exercises
        .iter()
        .filter(|e| options.from.map_or(true, |from| e.date >= from))
        .filter(|e| options.to.map_or(true, |to| e.date <= to))
        .take(options.limit.unwrap_or(usize::MAX))
        .map(|e| LogEntry {
            description: e.description.clone(),
            duration: e.duration,
            date: dates::human(e.date),
        })
        .collect();

    LogResponse {
        id: user.id.clone(),
        username: user.username.clone(),
        count: log.len(),
        log,
    }
}
