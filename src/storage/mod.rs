//! Storage layer for persistent report data.
//!
//! This module provides the persistence abstraction for daily reports: one
//! JSON file per calendar day behind the [`RecordStore`] trait. The calendar
//! day is the natural key, so the file layout itself enforces
//! one-report-per-day.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-per-day storage implementation
//! - `models`: Versioned record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::RecordStore;
pub use json::JsonRecordStore;
pub use models::{ReportRecord, SCHEMA_VERSION};
