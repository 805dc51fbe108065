//! Application state container and view model computation.
//!
//! This module defines [`AppState`], the central state container for nippo:
//! the active screen, the report registry with its cursor, the edit session,
//! the status line, terminal dimensions, and the color theme. It is mutated
//! only by the event handler and read by the (pure) render boundary.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` transforms a state snapshot into a renderable
//! representation, windowing the report list around the cursor so it fits the
//! terminal height. The theme lives in the state and travels into the render
//! boundary as a value; there is no global style state.

use chrono::Local;

use crate::app::editor::EditSession;
use crate::app::modes::View;
use crate::app::registry::ReportRegistry;
use crate::domain::Report;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyViewModel, EditViewModel, EmptyState, FooterInfo, HeaderInfo, ListRow, ListViewModel,
    StatusInfo, UiViewModel,
};

/// Rows taken by UI chrome around the list: header, footer, status, padding.
const CHROME_ROWS: usize = 6;

/// One-line feedback message surfaced after a save attempt.
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Message text.
    pub text: String,
    /// Whether the message reports a failure.
    pub is_error: bool,
}

impl StatusLine {
    /// An error status.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    /// A success/info status.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }
}

/// Central application state container.
///
/// Owns the edit session and the registry cursor exclusively; the record
/// store stays outside and is passed into the event handler per call, so
/// tests can substitute failing stores without rebuilding state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active screen.
    pub view: View,

    /// Ordered in-memory reports plus cursor.
    pub registry: ReportRegistry,

    /// Transient buffer and target for the entry being composed or edited.
    pub editor: EditSession,

    /// Feedback from the last save attempt, cleared when leaving `Edit`.
    pub status: Option<StatusLine>,

    /// Color scheme for UI rendering, passed into the render boundary.
    pub theme: Theme,

    /// Terminal height in rows, updated by resize events.
    pub rows: usize,

    /// Terminal width in columns, updated by resize events.
    pub cols: usize,
}

impl AppState {
    /// Creates the initial state on the list screen.
    ///
    /// `reports` is the sequence loaded from the record store at startup.
    #[must_use]
    pub fn new(reports: Vec<Report>, theme: Theme) -> Self {
        Self {
            view: View::List,
            registry: ReportRegistry::new(reports),
            editor: EditSession::default(),
            status: None,
            theme,
            rows: 24,
            cols: 80,
        }
    }

    /// Records new terminal dimensions.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Pure with respect to I/O; the only inputs are the state snapshot and
    /// the terminal dimensions.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let body = match self.view {
            View::List => BodyViewModel::List(self.compute_list(rows)),
            View::Edit => BodyViewModel::Edit(self.compute_edit(rows, cols)),
        };

        UiViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
            status: self.status.as_ref().map(|status| StatusInfo {
                text: status.text.clone(),
                is_error: status.is_error,
            }),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Daily Reports ({}) ", self.registry.len()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.view {
            View::List => {
                "j/k: navigate  Enter: open  n: today's report  q: quit".to_string()
            }
            View::Edit => {
                "Ctrl+S: save  Esc: cancel  Ctrl+D: dismiss entry  arrows: move caret".to_string()
            }
        };
        FooterInfo { keybindings }
    }

    fn compute_list(&self, rows: usize) -> ListViewModel {
        if self.registry.is_empty() {
            return ListViewModel {
                rows: vec![],
                empty_state: Some(EmptyState {
                    message: "No reports yet".to_string(),
                    subtitle: "Press n to start today's report".to_string(),
                }),
            };
        }

        let today = Local::now().date_naive();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        // Center the window on the cursor, then pull it back up when that
        // would leave unused rows at the bottom.
        let cursor = self.registry.cursor();
        let len = self.registry.len();
        let mut visible_start = cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(len);
        if visible_end - visible_start < available_rows && len >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let list_rows = self
            .registry
            .iter()
            .enumerate()
            .skip(visible_start)
            .take(visible_end - visible_start)
            .map(|(index, report)| self.compute_list_row(report, index, today))
            .collect();

        ListViewModel {
            rows: list_rows,
            empty_state: None,
        }
    }

    fn compute_list_row(
        &self,
        report: &Report,
        index: usize,
        today: chrono::NaiveDate,
    ) -> ListRow {
        let first_line = report.first_line();
        let preview = if first_line.is_empty() {
            "(empty)".to_string()
        } else {
            first_line.to_string()
        };

        ListRow {
            stamp: report.list_stamp(),
            preview,
            is_selected: index == self.registry.cursor(),
            is_today: report.day() == today,
        }
    }

    fn compute_edit(&self, _rows: usize, _cols: usize) -> EditViewModel {
        let target = self.editor.target();
        let heading = match target {
            Some(target) if target.is_new() => "New Daily Report".to_string(),
            _ => "Edit Daily Report".to_string(),
        };

        let (stamp, report_id) = target
            .and_then(|target| self.registry.get(target.index()))
            .map_or_else(
                || (Local::now().format("%Y-%m-%d %H:%M").to_string(), 0),
                |report| (report.detail_stamp(), report.id),
            );

        let position = format!("({}/{})", self.registry.cursor() + 1, self.registry.len());

        let lines = self
            .editor
            .buffer()
            .with_caret()
            .lines()
            .map(str::to_string)
            .collect();

        EditViewModel {
            heading,
            stamp,
            report_id,
            position,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report(id: i64, d: u32) -> Report {
        Report {
            id,
            content: format!("entry {id}\nmore"),
            date: Local.with_ymd_and_hms(2026, 8, d, 9, 0, 0).unwrap(),
        }
    }

    fn state_with(n: u32) -> AppState {
        let reports = (1..=n).map(|d| report(i64::from(d), d)).collect();
        AppState::new(reports, Theme::default())
    }

    #[test]
    fn empty_registry_yields_an_empty_state() {
        let state = AppState::new(vec![], Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            BodyViewModel::List(list) => {
                assert!(list.rows.is_empty());
                assert!(list.empty_state.is_some());
            }
            BodyViewModel::Edit(_) => panic!("expected list body"),
        }
    }

    #[test]
    fn list_rows_carry_preview_and_selection() {
        let state = state_with(2);
        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            BodyViewModel::List(list) => {
                assert_eq!(list.rows.len(), 2);
                assert!(list.rows[0].is_selected);
                assert_eq!(list.rows[0].preview, "entry 1");
                assert!(!list.rows[1].is_selected);
            }
            BodyViewModel::Edit(_) => panic!("expected list body"),
        }
    }

    #[test]
    fn list_is_windowed_around_the_cursor_on_small_terminals() {
        let mut state = state_with(20);
        state.registry.select(10);
        let vm = state.compute_viewmodel(10, 80);
        match vm.body {
            BodyViewModel::List(list) => {
                assert!(list.rows.len() <= 10);
                assert!(list.rows.iter().any(|row| row.is_selected));
            }
            BodyViewModel::Edit(_) => panic!("expected list body"),
        }
    }

    #[test]
    fn footer_follows_the_active_screen() {
        let mut state = state_with(1);
        assert!(state
            .compute_viewmodel(24, 80)
            .footer
            .keybindings
            .contains("today's report"));

        let first = state.registry.get(0).unwrap().clone();
        state.editor.begin_edit(0, &first);
        state.view = View::Edit;
        assert!(state
            .compute_viewmodel(24, 80)
            .footer
            .keybindings
            .contains("Ctrl+S"));
    }

    #[test]
    fn edit_body_reports_position_and_id() {
        let mut state = state_with(3);
        state.registry.select(1);
        let second = state.registry.get(1).unwrap().clone();
        state.editor.begin_edit(1, &second);
        state.view = View::Edit;

        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            BodyViewModel::Edit(edit) => {
                assert_eq!(edit.position, "(2/3)");
                assert_eq!(edit.report_id, 2);
                assert_eq!(edit.heading, "Edit Daily Report");
            }
            BodyViewModel::List(_) => panic!("expected edit body"),
        }
    }
}
