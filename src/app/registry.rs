//! In-memory report registry with a bounded cursor.
//!
//! This module defines [`ReportRegistry`], the ordered collection of reports
//! the UI renders from, together with the cursor that selects one of them.
//! All index access is bounds-checked: out-of-range positions are `None` or a
//! clamp, never a panic.
//!
//! The registry is a cache over the record store, not an authority. After any
//! write the owner calls [`ReportRegistry::reload`] so the in-memory sequence
//! is rebuilt from disk, which is the single source of truth. Ordering
//! follows [`RecordStore::load_all`] enumeration order (directory order, not
//! guaranteed chronological).
//!
//! # Deletion asymmetry
//!
//! [`ReportRegistry::delete_at`] removes an entry from the in-memory sequence
//! ONLY. The persisted file for that day is intentionally left on disk and
//! the entry reappears on the next reload or restart. "Delete" in the UI is a
//! dismissal, not a destructive operation; see the contract test
//! `delete_at_leaves_the_persisted_file_alone`.

use chrono::NaiveDate;

use crate::domain::error::Result;
use crate::domain::Report;
use crate::storage::RecordStore;

/// Ordered sequence of reports plus the cursor selecting one of them.
///
/// The cursor is always within `[0, len-1]` while the registry is non-empty
/// and pinned at 0 when it is empty. Mutating operations clamp it.
#[derive(Debug, Clone, Default)]
pub struct ReportRegistry {
    reports: Vec<Report>,
    cursor: usize,
}

impl ReportRegistry {
    /// Creates a registry over an initial report sequence, cursor at 0.
    #[must_use]
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports, cursor: 0 }
    }

    /// Number of reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the registry holds no reports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Current cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Report at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Report> {
        self.reports.get(index)
    }

    /// Report at the cursor, `None` when the registry is empty.
    #[must_use]
    pub fn selected(&self) -> Option<&Report> {
        self.reports.get(self.cursor)
    }

    /// Iterates the reports in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }

    /// Moves the cursor up by one; no-op at the top boundary.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down by one; no-op at the bottom boundary.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.reports.len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to `index`, clamped into range.
    pub fn select(&mut self, index: usize) {
        self.cursor = index.min(self.reports.len().saturating_sub(1));
    }

    /// Appends a report and returns its index.
    ///
    /// Used for the provisional entry created by select-today; the cursor is
    /// not moved (callers `select` explicitly).
    pub fn push(&mut self, report: Report) -> usize {
        self.reports.push(report);
        self.reports.len() - 1
    }

    /// Finds the report for a calendar day.
    ///
    /// Linear scan comparing the day component only, the same granularity the
    /// record store keys files by. Returns the index and the report.
    #[must_use]
    pub fn find_by_day(&self, day: NaiveDate) -> Option<(usize, &Report)> {
        self.reports
            .iter()
            .enumerate()
            .find(|(_, report)| report.day() == day)
    }

    /// Index of the report with the given id.
    #[must_use]
    pub fn position_of_id(&self, id: i64) -> Option<usize> {
        self.reports.iter().position(|report| report.id == id)
    }

    /// Discards the in-memory sequence and rebuilds it from the store.
    ///
    /// When `track_id` is given and present after the reload, the cursor
    /// relocates to that report; otherwise the old cursor is clamped into the
    /// new range.
    ///
    /// # Errors
    ///
    /// Propagates [`RecordStore::load_all`] failures; the previous in-memory
    /// sequence is left untouched in that case.
    pub fn reload(&mut self, store: &dyn RecordStore, track_id: Option<i64>) -> Result<()> {
        let _span = tracing::debug_span!("registry_reload", ?track_id).entered();

        let reports = store.load_all()?;
        self.reports = reports;

        self.cursor = track_id
            .and_then(|id| self.position_of_id(id))
            .unwrap_or(self.cursor)
            .min(self.reports.len().saturating_sub(1));

        tracing::debug!(count = self.reports.len(), cursor = self.cursor, "registry reloaded");
        Ok(())
    }

    /// Removes the report at `index` from the in-memory sequence only.
    ///
    /// The persisted file is NOT touched (see the module docs on deletion
    /// asymmetry). The cursor is clamped into the shrunken range. Returns the
    /// removed report, or `None` when `index` was out of range.
    pub fn delete_at(&mut self, index: usize) -> Option<Report> {
        if index >= self.reports.len() {
            return None;
        }
        let removed = self.reports.remove(index);
        self.cursor = self.cursor.min(self.reports.len().saturating_sub(1));

        tracing::debug!(report_id = removed.id, remaining = self.reports.len(), "report dismissed from registry");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonRecordStore;
    use chrono::{DateTime, Local, TimeZone};
    use tempfile::TempDir;

    fn stamp(d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, d, 9, 0, 0).unwrap()
    }

    fn report(id: i64, d: u32) -> Report {
        Report {
            id,
            content: format!("entry {id}"),
            date: stamp(d),
        }
    }

    fn registry_of(n: u32) -> ReportRegistry {
        ReportRegistry::new((1..=n).map(|d| report(i64::from(d), d)).collect())
    }

    #[test]
    fn cursor_clamps_at_bottom_boundary() {
        let mut registry = registry_of(3);
        for _ in 0..10 {
            registry.move_down();
        }
        assert_eq!(registry.cursor(), 2);
    }

    #[test]
    fn cursor_clamps_at_top_boundary() {
        let mut registry = registry_of(3);
        registry.select(2);
        for _ in 0..10 {
            registry.move_up();
        }
        assert_eq!(registry.cursor(), 0);
    }

    #[test]
    fn empty_registry_has_no_selection() {
        let mut registry = ReportRegistry::default();
        registry.move_down();
        registry.move_up();
        assert_eq!(registry.cursor(), 0);
        assert!(registry.selected().is_none());
    }

    #[test]
    fn find_by_day_matches_on_day_granularity() {
        let mut registry = registry_of(2);
        // Same day as report 2, different time of day.
        registry.push(Report {
            id: 9,
            content: "late entry".into(),
            date: Local.with_ymd_and_hms(2026, 8, 2, 23, 45, 0).unwrap(),
        });

        let (index, found) = registry.find_by_day(stamp(2).date_naive()).unwrap();
        assert_eq!(index, 1);
        assert_eq!(found.id, 2);
        assert!(registry.find_by_day(stamp(20).date_naive()).is_none());
    }

    #[test]
    fn delete_at_clamps_cursor_when_last_entry_removed() {
        let mut registry = registry_of(3);
        registry.select(2);
        let removed = registry.delete_at(2).unwrap();
        assert_eq!(removed.id, 3);
        assert_eq!(registry.cursor(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn delete_at_out_of_range_is_a_no_op() {
        let mut registry = registry_of(2);
        assert!(registry.delete_at(5).is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn delete_at_leaves_the_persisted_file_alone() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonRecordStore::new(dir.path().join("reports"));
        store.init().unwrap();
        store.save(&report(1, 7)).unwrap();

        let mut registry = ReportRegistry::default();
        registry.reload(&store, None).unwrap();
        assert_eq!(registry.len(), 1);

        registry.delete_at(0);
        assert!(registry.is_empty());

        // The dismissal is in-memory only: the record survives a reload.
        assert!(dir.path().join("reports/2026-08-07.json").is_file());
        registry.reload(&store, None).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reload_tracks_the_given_report_id() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonRecordStore::new(dir.path().join("reports"));
        store.init().unwrap();
        store.save(&report(1, 5)).unwrap();
        store.save(&report(2, 6)).unwrap();
        store.save(&report(3, 7)).unwrap();

        let mut registry = ReportRegistry::default();
        registry.reload(&store, Some(3)).unwrap();

        let selected = registry.selected().unwrap();
        assert_eq!(selected.id, 3);
    }

    #[test]
    fn reload_clamps_cursor_when_tracked_id_is_gone() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonRecordStore::new(dir.path().join("reports"));
        store.init().unwrap();
        store.save(&report(1, 7)).unwrap();

        let mut registry = registry_of(3);
        registry.select(2);
        registry.reload(&store, Some(42)).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.cursor(), 0);
    }
}
