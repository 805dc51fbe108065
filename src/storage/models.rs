//! Storage record models for the persistence layer.
//!
//! This module defines the on-disk representation of a report, separate from
//! the domain model so the persisted schema can evolve independently. The
//! record carries an explicit `schema_version`; loading a record written by a
//! newer schema is rejected rather than silently misread.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::Report;

/// Current version of the persisted record schema.
///
/// Version 1 drops the `title` field carried by earlier prototypes; the date
/// is the sole identifier of an entry.
pub const SCHEMA_VERSION: u32 = 1;

const fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// On-disk representation of one report.
///
/// Serialized as a pretty-printed JSON object, one file per calendar day:
///
/// ```json
/// {
///   "schema_version": 1,
///   "id": 3,
///   "content": "Status: green",
///   "date": "2026-08-07T14:30:00+09:00"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Persisted schema version; absent in pre-versioning files, treated as 1.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Unique report identifier, assigned at creation.
    pub id: i64,

    /// Entry text.
    pub content: String,

    /// Local timestamp of the last save, minute precision.
    pub date: DateTime<Local>,
}

impl ReportRecord {
    /// Whether this record's schema version can be read by this build.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.schema_version <= SCHEMA_VERSION
    }
}

impl From<&Report> for ReportRecord {
    fn from(report: &Report) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            id: report.id,
            content: report.content.clone(),
            date: report.date,
        }
    }
}

impl From<ReportRecord> for Report {
    fn from(record: ReportRecord) -> Self {
        Self {
            id: record.id,
            content: record.content,
            date: record.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_schema_version_defaults_to_current() {
        let json = r#"{"id": 1, "content": "x", "date": "2026-08-07T09:00:00+00:00"}"#;
        let record: ReportRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.schema_version, SCHEMA_VERSION);
        assert!(record.is_supported());
    }

    #[test]
    fn future_schema_version_is_unsupported() {
        let json =
            r#"{"schema_version": 99, "id": 1, "content": "x", "date": "2026-08-07T09:00:00+00:00"}"#;
        let record: ReportRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_supported());
    }

    #[test]
    fn record_round_trips_through_domain_report() {
        let json = r#"{"schema_version": 1, "id": 7, "content": "a\nb", "date": "2026-08-07T09:30:00+00:00"}"#;
        let record: ReportRecord = serde_json::from_str(json).unwrap();
        let report: Report = record.clone().into();
        assert_eq!(ReportRecord::from(&report), record);
    }
}
