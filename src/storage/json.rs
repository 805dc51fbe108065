//! JSON file-based record store.
//!
//! This module provides the production [`RecordStore`] backend: one
//! human-readable, pretty-printed JSON file per calendar day, named
//! `YYYY-MM-DD.json` inside the reports directory. The file name IS the
//! natural key, so writing a report for a day that already has a file
//! replaces it.
//!
//! # Performance Characteristics
//!
//! - **Save**: O(1) - serializes and writes a single record
//! - **Load**: O(n) - reads every record file in the directory
//! - **Best for**: one entry per day, years of history, infrequent writes

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::error::{NippoError, Result};
use crate::domain::{Report, DAY_KEY_FORMAT};
use crate::storage::backend::RecordStore;
use crate::storage::models::ReportRecord;

/// File extension used for persisted records.
const RECORD_EXT: &str = "json";

/// JSON file record store.
///
/// Stores each report as an individual JSON file keyed by its calendar day.
/// The store holds no in-memory cache: every read goes to disk, which keeps
/// disk the single source of truth and lets the registry re-synchronize by
/// re-reading after each write.
///
/// # File Layout
///
/// ```text
/// data/reports/
///   2026-08-05.json
///   2026-08-06.json
///   2026-08-07.json
/// ```
pub struct JsonRecordStore {
    /// Directory holding one record file per day.
    dir: PathBuf,
}

impl JsonRecordStore {
    /// Creates a store rooted at the given reports directory.
    ///
    /// The directory is not touched until [`RecordStore::init`] runs.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the record file path for a calendar day.
    fn record_path(&self, day: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.{RECORD_EXT}", day.format(DAY_KEY_FORMAT)))
    }

    /// Reads and deserializes one record file.
    fn read_record(path: &Path) -> Result<Report> {
        let contents = fs::read_to_string(path)?;
        let record: ReportRecord =
            serde_json::from_str(&contents).map_err(|e| NippoError::CorruptRecord {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if !record.is_supported() {
            return Err(NippoError::CorruptRecord {
                path: path.display().to_string(),
                reason: format!("unsupported schema version {}", record.schema_version),
            });
        }

        Ok(record.into())
    }

    /// Whether a directory entry looks like a record file.
    fn is_record_file(path: &Path) -> bool {
        path.is_file() && path.extension().is_some_and(|ext| ext == RECORD_EXT)
    }
}

impl RecordStore for JsonRecordStore {
    fn init(&self) -> Result<()> {
        tracing::debug!(dir = ?self.dir, "initializing record store");

        fs::create_dir_all(&self.dir).map_err(|e| {
            NippoError::StorageUnavailable(format!(
                "cannot create reports directory {}: {e}",
                self.dir.display()
            ))
        })
    }

    fn save(&mut self, report: &Report) -> Result<()> {
        let path = self.record_path(report.day());
        let _span = tracing::debug_span!("save_report",
            report_id = report.id,
            path = ?path
        )
        .entered();

        let record = ReportRecord::from(report);
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| NippoError::Persist(format!("failed to serialize report: {e}")))?;

        fs::write(&path, json)
            .map_err(|e| NippoError::Persist(format!("failed to write {}: {e}", path.display())))?;

        tracing::debug!("report saved");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Report>> {
        let _span = tracing::debug_span!("load_all_reports", dir = ?self.dir).entered();

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("reports directory does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reports = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !Self::is_record_file(&path) {
                continue;
            }
            reports.push(Self::read_record(&path)?);
        }

        tracing::debug!(count = reports.len(), "loaded reports");
        Ok(reports)
    }

    fn load_by_date(&self, day: NaiveDate) -> Result<Report> {
        let path = self.record_path(day);
        let _span = tracing::debug_span!("load_report_by_date", day = %day).entered();

        if !path.exists() {
            tracing::debug!("no record for day");
            return Err(NippoError::NotFound { day });
        }

        Self::read_record(&path)
    }

    fn next_id(&self) -> Result<i64> {
        let max_id = self
            .load_all()?
            .iter()
            .map(|report| report.id)
            .max()
            .unwrap_or(0);

        let id = max_id.saturating_add(1);
        tracing::debug!(next_id = id, "minted report id");
        Ok(id)
    }
}
