//! Report domain model and operations.
//!
//! This module defines the core `Report` type representing one daily journal
//! entry. Reports are keyed by their calendar day on disk, so the type owns the
//! day-key derivation used by both the storage layer (file naming) and the
//! registry (lookup by day).

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used to derive the on-disk natural key (`2026-08-07`).
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Represents one daily report.
///
/// A report is a free-form multi-line text entry tied to a calendar timestamp.
/// The timestamp's day component is the natural key: only one persisted report
/// may exist per calendar day, and saving a second one for the same day
/// overwrites the first.
///
/// # Fields
///
/// - `id`: unique identifier assigned at creation, never reused
/// - `content`: entry text, empty for a freshly created unsaved report
/// - `date`: local timestamp with minute precision; re-stamped on every save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub content: String,
    pub date: DateTime<Local>,
}

impl Report {
    /// Creates a blank report for the given timestamp.
    ///
    /// Content starts empty; the entry only reaches disk once the user saves
    /// it through the edit session.
    #[must_use]
    pub fn new(id: i64, date: DateTime<Local>) -> Self {
        Self {
            id,
            content: String::new(),
            date,
        }
    }

    /// Returns the calendar day this report belongs to.
    ///
    /// Two reports are "the same day's report" exactly when their `day()`s are
    /// equal, regardless of the time-of-day component.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Returns the day key used to name this report's file (`YYYY-MM-DD`).
    #[must_use]
    pub fn day_key(&self) -> String {
        self.date.format(DAY_KEY_FORMAT).to_string()
    }

    /// Short timestamp for list rows (`08/07 14:30`).
    #[must_use]
    pub fn list_stamp(&self) -> String {
        self.date.format("%m/%d %H:%M").to_string()
    }

    /// Full timestamp for the detail header (`2026-08-07 14:30`).
    #[must_use]
    pub fn detail_stamp(&self) -> String {
        self.date.format("%Y-%m-%d %H:%M").to_string()
    }

    /// First line of the content, for list previews.
    ///
    /// Empty content yields an empty string; callers decide how to label an
    /// unsaved placeholder.
    #[must_use]
    pub fn first_line(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}
