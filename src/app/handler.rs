//! Event handling and state transition logic.
//!
//! This module implements the single dispatch entry point of the view state
//! machine. Raw key events arrive from the terminal shim, are interpreted
//! according to the active screen, and mutate the registry and edit session.
//! Persistence effects run synchronously against the [`RecordStore`] passed
//! in per call; the only effect delegated back to the shim is [`Action::Quit`].
//!
//! # Architecture
//!
//! The handler follows the unidirectional flow:
//!
//! ```text
//! Key Event → handle_event → state mutations (+ store I/O) → Actions
//! ```
//!
//! One event is fully processed before the next is accepted; no operation
//! outlives the event that triggered it. Store failures are logged and
//! surfaced on the status line, never silently swallowed; only the expected
//! absence of "no report yet today" is treated as control flow.

use chrono::Local;

use crate::app::modes::View;
use crate::app::state::{AppState, StatusLine};
use crate::domain::error::Result;
use crate::domain::Report;
use crate::storage::RecordStore;

/// Discrete key events delivered by the terminal shim.
///
/// The shim maps terminal input 1:1 onto these values; which transition (if
/// any) a key triggers is decided here, per screen. Unlisted keys never reach
/// the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Enter / return.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// A printable character.
    Char(char),
    /// Ctrl+S (save).
    CtrlS,
    /// Ctrl+D (dismiss entry).
    CtrlD,
    /// Ctrl+C (quit, global).
    CtrlC,
    /// Terminal was resized.
    Resize {
        /// New height in rows.
        rows: u16,
        /// New width in columns.
        cols: u16,
    },
}

/// Commands for the terminal shim, produced by the event handler.
///
/// The state machine performs its own store I/O; the shim only needs to know
/// when to tear the terminal down and exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the event loop and terminate the process normally.
    Quit,
}

/// Processes one key event, mutating state and returning shim actions.
///
/// Returns `(should_render, actions)`: `should_render` is `false` when the
/// event provably changed nothing (no-ops at cursor boundaries, refused empty
/// saves), letting the shim skip a frame.
///
/// # Errors
///
/// Store failures during save/reload are handled internally (logged, surfaced
/// on the status line); the `Result` is reserved for failures the machine
/// cannot absorb, which currently do not occur.
pub fn handle_event(
    state: &mut AppState,
    store: &mut dyn RecordStore,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, view = ?state.view).entered();

    match event {
        Event::CtrlC => return Ok((false, vec![Action::Quit])),
        Event::Resize { rows, cols } => {
            state.resize(*rows as usize, *cols as usize);
            return Ok((true, vec![]));
        }
        _ => {}
    }

    match state.view {
        View::List => handle_list_event(state, store, event),
        View::Edit => handle_edit_event(state, store, event),
    }
}

fn handle_list_event(
    state: &mut AppState,
    store: &mut dyn RecordStore,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Char('q') => Ok((false, vec![Action::Quit])),
        Event::Char('n') => select_today(state, store),
        Event::Enter | Event::Char('l') => open_selected(state),
        Event::Up | Event::Char('k') => {
            state.registry.move_up();
            Ok((true, vec![]))
        }
        Event::Down | Event::Char('j') => {
            state.registry.move_down();
            Ok((true, vec![]))
        }
        _ => Ok((false, vec![])),
    }
}

fn handle_edit_event(
    state: &mut AppState,
    store: &mut dyn RecordStore,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Esc => {
            state.editor.cancel(&mut state.registry);
            state.status = None;
            state.view = View::List;
            tracing::debug!("edit cancelled");
            Ok((true, vec![]))
        }
        Event::CtrlS => save_current(state, store),
        Event::CtrlD => dismiss_current(state),

        // Everything else belongs to the text buffer, not the state machine.
        Event::Char(ch) => {
            state.editor.buffer_mut().insert_char(*ch);
            Ok((true, vec![]))
        }
        Event::Enter => {
            state.editor.buffer_mut().insert_newline();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            state.editor.buffer_mut().backspace();
            Ok((true, vec![]))
        }
        Event::Left => {
            state.editor.buffer_mut().move_left();
            Ok((true, vec![]))
        }
        Event::Right => {
            state.editor.buffer_mut().move_right();
            Ok((true, vec![]))
        }
        Event::Up => {
            state.editor.buffer_mut().move_up();
            Ok((true, vec![]))
        }
        Event::Down => {
            state.editor.buffer_mut().move_down();
            Ok((true, vec![]))
        }
        _ => Ok((false, vec![])),
    }
}

/// Jumps to today's report, creating a blank one first when none exists.
///
/// One atomic user-visible action: find today's entry in the registry (day
/// granularity, matching the store's natural key) and edit it, or mint an id,
/// append a blank provisional entry, and compose it. Invoking this again
/// before a save finds the provisional by day instead of appending a second
/// placeholder.
fn select_today(state: &mut AppState, store: &mut dyn RecordStore) -> Result<(bool, Vec<Action>)> {
    let now = Local::now();
    state.status = None;

    if let Some((index, report)) = state.registry.find_by_day(now.date_naive()) {
        tracing::debug!(report_id = report.id, "editing today's existing report");
        let report = report.clone();
        state.registry.select(index);
        state.editor.begin_edit(index, &report);
        state.view = View::Edit;
        return Ok((true, vec![]));
    }

    let id = match store.next_id() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "failed to mint a report id");
            state.status = Some(StatusLine::error(format!("Cannot create report: {e}")));
            return Ok((true, vec![]));
        }
    };

    tracing::debug!(report_id = id, "starting today's report");
    let index = state.registry.push(Report::new(id, now));
    state.registry.select(index);
    state.editor.begin_new(index);
    state.view = View::Edit;
    Ok((true, vec![]))
}

/// Opens the report at the cursor for editing; no-op when the list is empty.
fn open_selected(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Some(report) = state.registry.selected().cloned() else {
        return Ok((false, vec![]));
    };

    tracing::debug!(report_id = report.id, "opening report");
    state.status = None;
    state.editor.begin_edit(state.registry.cursor(), &report);
    state.view = View::Edit;
    Ok((true, vec![]))
}

/// Saves the current edit session.
///
/// An empty buffer is refused outright: no state change, no store call. On
/// success the registry re-reads persisted state (disk is the source of
/// truth), the cursor relocates to the saved report, and the machine returns
/// to the list. On failure the error is logged and surfaced, and the machine
/// stays in `Edit` with the buffer intact.
fn save_current(state: &mut AppState, store: &mut dyn RecordStore) -> Result<(bool, Vec<Action>)> {
    if state.editor.buffer().is_empty() {
        tracing::debug!("refusing to save an empty report");
        return Ok((false, vec![]));
    }

    let Some(report) = state.editor.commit(&state.registry) else {
        return Ok((false, vec![]));
    };

    if let Err(e) = store.save(&report) {
        tracing::error!(report_id = report.id, error = %e, "failed to save report");
        state.status = Some(StatusLine::error(format!("Save failed: {e}")));
        return Ok((true, vec![]));
    }

    match state.registry.reload(store, Some(report.id)) {
        Ok(()) => {
            state.status = Some(StatusLine::info(format!("Saved {}", report.day_key())));
        }
        Err(e) => {
            // The record is on disk; the registry re-syncs on the next reload.
            tracing::error!(error = %e, "failed to reload registry after save");
            state.status = Some(StatusLine::error(format!("Saved, but reload failed: {e}")));
        }
    }

    state.editor.reset();
    state.view = View::List;
    Ok((true, vec![]))
}

/// Dismisses the report being edited from the in-memory registry.
///
/// Only meaningful for an existing entry; a provisional one is discarded via
/// cancel. The persisted file is intentionally NOT deleted (see the registry
/// docs). When the registry empties the machine is forced back to the list;
/// otherwise editing continues on the report now at the cursor.
fn dismiss_current(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Some(target) = state.editor.target() else {
        return Ok((false, vec![]));
    };
    if target.is_new() {
        return Ok((false, vec![]));
    }

    state.registry.delete_at(target.index());
    state.status = None;

    if state.registry.is_empty() {
        state.editor.reset();
        state.view = View::List;
        return Ok((true, vec![]));
    }

    let index = state.registry.cursor();
    if let Some(report) = state.registry.get(index).cloned() {
        state.editor.begin_edit(index, &report);
    }
    Ok((true, vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NippoError;
    use crate::storage::JsonRecordStore;
    use crate::ui::theme::Theme;
    use chrono::{NaiveDate, TimeZone};
    use tempfile::TempDir;

    /// Store double whose writes always fail; reads see an empty store.
    struct FailingStore;

    impl RecordStore for FailingStore {
        fn init(&self) -> Result<()> {
            Ok(())
        }
        fn save(&mut self, _report: &Report) -> Result<()> {
            Err(NippoError::Persist("disk full".to_string()))
        }
        fn load_all(&self) -> Result<Vec<Report>> {
            Ok(vec![])
        }
        fn load_by_date(&self, day: NaiveDate) -> Result<Report> {
            Err(NippoError::NotFound { day })
        }
        fn next_id(&self) -> Result<i64> {
            Ok(1)
        }
    }

    fn empty_state() -> AppState {
        AppState::new(vec![], Theme::default())
    }

    fn state_of(n: u32) -> AppState {
        let reports = (1..=n)
            .map(|d| Report {
                id: i64::from(d),
                content: format!("entry {d}"),
                date: Local.with_ymd_and_hms(2026, 8, d, 9, 0, 0).unwrap(),
            })
            .collect();
        AppState::new(reports, Theme::default())
    }

    fn disk_store(dir: &TempDir) -> JsonRecordStore {
        let store = JsonRecordStore::new(dir.path().join("reports"));
        store.init().unwrap();
        store
    }

    fn press(state: &mut AppState, store: &mut dyn RecordStore, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, store, &event).unwrap()
    }

    fn type_text(state: &mut AppState, store: &mut dyn RecordStore, text: &str) {
        for ch in text.chars() {
            press(state, store, Event::Char(ch));
        }
    }

    #[test]
    fn quit_fires_from_both_screens() {
        let mut store = FailingStore;

        let mut state = state_of(1);
        let (_, actions) = press(&mut state, &mut store, Event::Char('q'));
        assert_eq!(actions, vec![Action::Quit]);

        let mut state = state_of(1);
        press(&mut state, &mut store, Event::Enter);
        assert_eq!(state.view, View::Edit);
        let (_, actions) = press(&mut state, &mut store, Event::CtrlC);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn cursor_clamps_under_repeated_navigation() {
        let mut store = FailingStore;
        let mut state = state_of(3);

        for _ in 0..10 {
            press(&mut state, &mut store, Event::Down);
        }
        assert_eq!(state.registry.cursor(), 2);

        for _ in 0..10 {
            press(&mut state, &mut store, Event::Char('k'));
        }
        assert_eq!(state.registry.cursor(), 0);
    }

    #[test]
    fn open_on_empty_list_is_a_no_op() {
        let mut store = FailingStore;
        let mut state = empty_state();
        let (rendered, actions) = press(&mut state, &mut store, Event::Enter);
        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.view, View::List);
    }

    #[test]
    fn open_loads_the_selected_report_into_the_buffer() {
        let mut store = FailingStore;
        let mut state = state_of(2);
        press(&mut state, &mut store, Event::Char('j'));
        press(&mut state, &mut store, Event::Char('l'));

        assert_eq!(state.view, View::Edit);
        assert_eq!(state.editor.buffer().text(), "entry 2");
    }

    #[test]
    fn empty_save_changes_nothing_and_never_touches_the_store() {
        let dir = TempDir::new().unwrap();
        let mut store = disk_store(&dir);
        let mut state = empty_state();

        press(&mut state, &mut store, Event::Char('n'));
        assert_eq!(state.view, View::Edit);

        let (rendered, actions) = press(&mut state, &mut store, Event::CtrlS);
        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.view, View::Edit);
        assert!(state.status.is_none());
        // No record file was written.
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn cancel_discards_the_new_entry_and_leaves_disk_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = disk_store(&dir);
        let mut state = empty_state();

        press(&mut state, &mut store, Event::Char('n'));
        type_text(&mut state, &mut store, "half a thought");
        press(&mut state, &mut store, Event::Esc);

        assert_eq!(state.view, View::List);
        assert!(state.registry.is_empty());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn select_today_twice_does_not_duplicate_the_placeholder() {
        let dir = TempDir::new().unwrap();
        let mut store = disk_store(&dir);
        let mut state = empty_state();

        press(&mut state, &mut store, Event::Char('n'));
        assert_eq!(state.registry.len(), 1);

        // Back to the list without cancelling, then select today again: the
        // provisional entry is found by day, not appended a second time.
        state.view = View::List;
        press(&mut state, &mut store, Event::Char('n'));
        assert_eq!(state.registry.len(), 1);
        assert_eq!(state.view, View::Edit);
    }

    #[test]
    fn select_today_reopens_a_saved_report_for_editing() {
        let dir = TempDir::new().unwrap();
        let mut store = disk_store(&dir);
        let mut state = empty_state();

        press(&mut state, &mut store, Event::Char('n'));
        type_text(&mut state, &mut store, "first pass");
        press(&mut state, &mut store, Event::CtrlS);
        assert_eq!(state.view, View::List);

        press(&mut state, &mut store, Event::Char('n'));
        assert_eq!(state.view, View::Edit);
        assert_eq!(state.editor.buffer().text(), "first pass");
        // Editing an existing entry: cancel must not drop it.
        press(&mut state, &mut store, Event::Esc);
        assert_eq!(state.registry.len(), 1);
    }

    #[test]
    fn save_persists_and_returns_to_the_list_tracking_the_saved_id() {
        let dir = TempDir::new().unwrap();
        let mut store = disk_store(&dir);
        let mut state = empty_state();

        press(&mut state, &mut store, Event::Char('n'));
        type_text(&mut state, &mut store, "Status: green");
        press(&mut state, &mut store, Event::CtrlS);

        assert_eq!(state.view, View::List);
        assert_eq!(state.registry.len(), 1);
        let saved = state.registry.selected().unwrap();
        assert_eq!(saved.content, "Status: green");

        let on_disk = store.load_by_date(Local::now().date_naive()).unwrap();
        assert_eq!(on_disk.content, "Status: green");
        assert_eq!(on_disk.id, saved.id);
        assert!(state.status.as_ref().is_some_and(|s| !s.is_error));
    }

    #[test]
    fn failed_save_stays_in_edit_with_the_buffer_intact() {
        let mut store = FailingStore;
        let mut state = empty_state();

        press(&mut state, &mut store, Event::Char('n'));
        type_text(&mut state, &mut store, "do not lose this");
        press(&mut state, &mut store, Event::CtrlS);

        assert_eq!(state.view, View::Edit);
        assert_eq!(state.editor.buffer().text(), "do not lose this");
        assert!(state.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn second_save_on_the_same_day_overwrites_the_record() {
        let dir = TempDir::new().unwrap();
        let mut store = disk_store(&dir);
        let mut state = empty_state();

        press(&mut state, &mut store, Event::Char('n'));
        type_text(&mut state, &mut store, "morning");
        press(&mut state, &mut store, Event::CtrlS);

        press(&mut state, &mut store, Event::Char('n'));
        type_text(&mut state, &mut store, " and evening");
        press(&mut state, &mut store, Event::CtrlS);

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].content, "morning and evening");
    }

    #[test]
    fn dismiss_removes_from_memory_but_not_from_disk() {
        let dir = TempDir::new().unwrap();
        let mut store = disk_store(&dir);
        let mut state = empty_state();

        press(&mut state, &mut store, Event::Char('n'));
        type_text(&mut state, &mut store, "persisted");
        press(&mut state, &mut store, Event::CtrlS);

        press(&mut state, &mut store, Event::Enter);
        press(&mut state, &mut store, Event::CtrlD);

        // Registry emptied, so the machine is forced back to the list.
        assert_eq!(state.view, View::List);
        assert!(state.registry.is_empty());
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn dismiss_with_entries_left_continues_editing_at_the_cursor() {
        let mut store = FailingStore;
        let mut state = state_of(3);
        press(&mut state, &mut store, Event::Char('j'));
        press(&mut state, &mut store, Event::Enter);

        press(&mut state, &mut store, Event::CtrlD);
        assert_eq!(state.view, View::Edit);
        assert_eq!(state.registry.len(), 2);
        // The report now at the cursor is loaded for editing.
        assert_eq!(state.editor.buffer().text(), "entry 3");
    }

    #[test]
    fn dismiss_while_composing_new_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut store = disk_store(&dir);
        let mut state = empty_state();

        press(&mut state, &mut store, Event::Char('n'));
        let (rendered, _) = press(&mut state, &mut store, Event::CtrlD);
        assert!(!rendered);
        assert_eq!(state.registry.len(), 1);
        assert_eq!(state.view, View::Edit);
    }

    #[test]
    fn unhandled_keys_in_edit_reach_the_buffer_verbatim() {
        let mut store = FailingStore;
        let mut state = state_of(1);
        press(&mut state, &mut store, Event::Enter);

        // 'q', 'n', 'j', 'k' are commands in the list screen but plain text here.
        type_text(&mut state, &mut store, "qnjk");
        press(&mut state, &mut store, Event::Enter);
        type_text(&mut state, &mut store, "line2");
        press(&mut state, &mut store, Event::Backspace);

        assert_eq!(state.editor.buffer().text(), "entry 1qnjk\nline");
        assert_eq!(state.view, View::Edit);
    }

    #[test]
    fn resize_updates_dimensions_in_any_screen() {
        let mut store = FailingStore;
        let mut state = state_of(1);
        press(&mut state, &mut store, Event::Resize { rows: 40, cols: 120 });
        assert_eq!((state.rows, state.cols), (40, 120));
    }

    #[test]
    fn startup_scenario_from_empty_store_to_reload() {
        let dir = TempDir::new().unwrap();
        let mut store = disk_store(&dir);
        assert!(store.load_all().unwrap().is_empty());

        let mut state = AppState::new(store.load_all().unwrap(), Theme::default());
        press(&mut state, &mut store, Event::Char('n'));
        type_text(&mut state, &mut store, "Status: green");
        press(&mut state, &mut store, Event::CtrlS);

        let today_key = Local::now().format("%Y-%m-%d").to_string();
        assert!(dir.path().join(format!("reports/{today_key}.json")).is_file());

        // "Restart": rebuild everything from disk.
        let reloaded = store.load_all().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].content, "Status: green");
        let restarted = AppState::new(reloaded, Theme::default());
        assert_eq!(restarted.registry.len(), 1);
    }
}
