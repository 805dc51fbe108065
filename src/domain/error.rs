//! Error types for nippo.
//!
//! This module defines the centralized error type [`NippoError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for nippo operations.
///
/// This enum consolidates all error conditions that can occur while managing
/// reports, from storage initialization to record parsing. The variants map
/// directly onto how the application reacts: `StorageUnavailable` aborts startup,
/// `Persist` is reported to the user without a state transition, `NotFound` is
/// control flow for "no report yet that day", and `CorruptRecord` fails a load.
#[derive(Debug, Error)]
pub enum NippoError {
    /// The backing storage location could not be created or accessed.
    ///
    /// Raised by store initialization. Fatal at startup: there is nowhere to
    /// persist reports.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Serializing or writing a report to disk failed.
    ///
    /// Reported to the user; the in-memory state is left untouched so the
    /// entry can be retried or copied out.
    #[error("failed to persist report: {0}")]
    Persist(String),

    /// No persisted report exists for the given calendar day.
    ///
    /// Expected absence, not a fault. Callers checking for "today's report"
    /// treat this as the signal to create one.
    #[error("no report found for {day}")]
    NotFound {
        /// The calendar day that was looked up.
        day: NaiveDate,
    },

    /// A persisted record could not be parsed.
    ///
    /// Fails the entire load; the offending file path and parse failure are
    /// carried for the diagnostic.
    #[error("corrupt record {path}: {reason}")]
    CorruptRecord {
        /// Path of the unparsable record file.
        path: String,
        /// Description of what went wrong during deserialization.
        reason: String,
    },

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for nippo operations.
///
/// This is a type alias for `std::result::Result<T, NippoError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, NippoError>;
