//! Edit session and text buffer for the report being composed or edited.
//!
//! This module holds the transient editing state: a multi-line text buffer
//! with a caret, and the session bookkeeping that knows whether the buffer
//! belongs to a brand-new report or an existing one. At most one session is
//! active at a time (single-threaded UI).
//!
//! The session never persists anything itself. [`EditSession::commit`]
//! produces the finalized [`Report`]; the view state machine is responsible
//! for saving it and re-synchronizing the registry, and only then calls
//! [`EditSession::reset`]. A failed save therefore leaves the buffer intact.

use chrono::Local;

use crate::app::modes::EditTarget;
use crate::app::registry::ReportRegistry;
use crate::domain::Report;

/// Multi-line text buffer with a byte-indexed caret.
///
/// The caret always sits on a `char` boundary. Vertical movement remembers
/// the column by counting characters from the start of the current line and
/// re-applying that column on the target line, clamped to its length.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    text: String,
    caret: usize,
}

impl EditBuffer {
    /// Buffer contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the buffer holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Caret position as a byte offset into the text.
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Replaces the contents, placing the caret at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.text.len();
    }

    /// Clears the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    /// Inserts a character at the caret.
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.caret, ch);
        self.caret += ch.len_utf8();
    }

    /// Inserts a line break at the caret.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Deletes the character before the caret; no-op at the start.
    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        let prev = self.prev_boundary(self.caret);
        self.text.drain(prev..self.caret);
        self.caret = prev;
    }

    /// Moves the caret one character left; no-op at the start.
    pub fn move_left(&mut self) {
        if self.caret > 0 {
            self.caret = self.prev_boundary(self.caret);
        }
    }

    /// Moves the caret one character right; no-op at the end.
    pub fn move_right(&mut self) {
        if self.caret < self.text.len() {
            self.caret = self.next_boundary(self.caret);
        }
    }

    /// Moves the caret to the previous line, keeping the column when possible.
    pub fn move_up(&mut self) {
        let (line_starts, line_idx, col) = self.line_state();
        if line_idx == 0 {
            return;
        }
        self.caret = self.index_at_col(line_starts[line_idx - 1], col);
    }

    /// Moves the caret to the next line, keeping the column when possible.
    pub fn move_down(&mut self) {
        let (line_starts, line_idx, col) = self.line_state();
        if line_idx + 1 >= line_starts.len() {
            return;
        }
        self.caret = self.index_at_col(line_starts[line_idx + 1], col);
    }

    /// Returns the text with a caret glyph inserted, for rendering.
    #[must_use]
    pub fn with_caret(&self) -> String {
        let mut text = self.text.clone();
        text.insert_str(self.caret, "\u{258c}");
        text
    }

    fn prev_boundary(&self, from: usize) -> usize {
        self.text[..from]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self, from: usize) -> usize {
        self.text[from..]
            .chars()
            .next()
            .map_or(from, |ch| from + ch.len_utf8())
    }

    /// Byte offsets of every line start, the caret's line, and its column
    /// (in characters from that line's start).
    fn line_state(&self) -> (Vec<usize>, usize, usize) {
        let mut line_starts = vec![0];
        for (i, ch) in self.text.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }

        let line_idx = line_starts
            .iter()
            .rposition(|&start| start <= self.caret)
            .unwrap_or(0);
        let col = self.text[line_starts[line_idx]..self.caret].chars().count();

        (line_starts, line_idx, col)
    }

    /// Byte offset `col` characters into the line starting at `line_start`,
    /// clamped to that line's end.
    fn index_at_col(&self, line_start: usize, col: usize) -> usize {
        let mut index = line_start;
        for ch in self.text[line_start..].chars().take(col) {
            if ch == '\n' {
                break;
            }
            index += ch.len_utf8();
        }
        index
    }
}

/// Transient state for the report currently being composed or edited.
///
/// Holds the live [`EditBuffer`] and the [`EditTarget`] identifying which
/// registry entry the buffer belongs to. `None` target means no session is
/// active (the list screen is showing).
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    buffer: EditBuffer,
    target: Option<EditTarget>,
}

impl EditSession {
    /// The live text buffer.
    #[must_use]
    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Mutable access to the text buffer for delegated key handling.
    pub fn buffer_mut(&mut self) -> &mut EditBuffer {
        &mut self.buffer
    }

    /// The active editing target, if a session is in progress.
    #[must_use]
    pub const fn target(&self) -> Option<EditTarget> {
        self.target
    }

    /// Starts composing the brand-new provisional report at `index`.
    ///
    /// Clears the buffer and marks the session as not-editing-existing.
    pub fn begin_new(&mut self, index: usize) {
        self.buffer.clear();
        self.target = Some(EditTarget::New { index });
    }

    /// Starts editing the existing report at `index`.
    ///
    /// Loads the report's content into the buffer, caret at the end.
    pub fn begin_edit(&mut self, index: usize, report: &Report) {
        self.buffer.set_text(&report.content);
        self.target = Some(EditTarget::Existing { index });
    }

    /// Discards the session.
    ///
    /// When the session was composing a brand-new, never-saved report, the
    /// provisional entry is also removed from the registry so no empty
    /// placeholder is left behind by an aborted creation.
    pub fn cancel(&mut self, registry: &mut ReportRegistry) {
        if let Some(target) = self.target.take() {
            if target.is_new() {
                registry.delete_at(target.index());
            }
        }
        self.buffer.clear();
    }

    /// Produces the finalized report for the active session.
    ///
    /// For an existing target this is the registry entry with the buffer as
    /// its content; for a new target it is the provisional entry (carrying
    /// the id minted at creation) filled in. Either way the date is
    /// re-stamped to now. Returns `None` when no session is active or the
    /// target index fell out of range.
    ///
    /// Does NOT persist and does NOT mutate the session: the caller saves,
    /// reloads the registry, and then calls [`reset`](Self::reset), so a
    /// failed save keeps the buffer editable.
    #[must_use]
    pub fn commit(&self, registry: &ReportRegistry) -> Option<Report> {
        let target = self.target?;
        let base = registry.get(target.index())?;

        Some(Report {
            id: base.id,
            content: self.buffer.text().to_string(),
            date: Local::now(),
        })
    }

    /// Ends the session after a successful save.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.target = None;
    }
}
