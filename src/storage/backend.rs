//! Storage backend abstraction.
//!
//! This module defines the [`RecordStore`] trait that abstracts over report
//! persistence. The production backend is [`JsonRecordStore`](crate::storage::JsonRecordStore);
//! tests substitute in-memory or deliberately failing implementations to drive
//! the state machine through error paths.
//!
//! # Design Philosophy
//!
//! The trait is minimal and shaped by the actual use cases of the view state
//! machine: initialize once at startup, save one report, re-read everything
//! after a write (disk is the source of truth), look up a single day, and mint
//! identifiers. It is not a generic repository.

use chrono::NaiveDate;

use crate::domain::error::Result;
use crate::domain::Report;

/// Abstraction over durable report persistence keyed by calendar day.
///
/// Implementations persist at most one record per calendar day: saving a report
/// whose day already has a record replaces it.
pub trait RecordStore {
    /// Ensures the backing storage location exists.
    ///
    /// # Errors
    ///
    /// Returns [`NippoError::StorageUnavailable`](crate::domain::NippoError::StorageUnavailable)
    /// if the location cannot be created. This is fatal at startup.
    fn init(&self) -> Result<()>;

    /// Persists one report to the location derived from its date.
    ///
    /// Overwrites any existing record for the same calendar day; this is the
    /// mechanism that enforces one-report-per-day.
    ///
    /// # Errors
    ///
    /// Returns [`NippoError::Persist`](crate::domain::NippoError::Persist) on
    /// serialization or write failure.
    fn save(&mut self, report: &Report) -> Result<()>;

    /// Loads every persisted report.
    ///
    /// Returns an empty sequence (not an error) when the storage location does
    /// not exist yet. Ordering follows directory enumeration order and is not
    /// guaranteed to be chronological.
    ///
    /// # Errors
    ///
    /// A single malformed record fails the whole call with
    /// [`NippoError::CorruptRecord`](crate::domain::NippoError::CorruptRecord).
    fn load_all(&self) -> Result<Vec<Report>>;

    /// Loads the single report persisted for the given calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`NippoError::NotFound`](crate::domain::NippoError::NotFound)
    /// when no record exists for that day; callers treat this as expected
    /// absence, not a fault.
    fn load_by_date(&self, day: NaiveDate) -> Result<Report>;

    /// Returns an identifier that does not collide with any persisted report.
    ///
    /// Implemented as a scan-and-increment over existing records (max id + 1).
    /// Identifiers are never reused.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan over persisted records fails.
    fn next_id(&self) -> Result<i64>;
}
