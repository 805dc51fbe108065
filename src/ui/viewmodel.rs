//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer; they contain no business logic, only display-ready data, so
//! the render boundary stays a pure function of state.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title, entry count).
    pub header: HeaderInfo,

    /// Body of the active screen.
    pub body: BodyViewModel,

    /// Footer information (keybinding hints for the active screen).
    pub footer: FooterInfo,

    /// Optional one-line status message (save success/failure).
    pub status: Option<StatusInfo>,
}

/// Screen-specific body content.
#[derive(Debug, Clone)]
pub enum BodyViewModel {
    /// Report list (possibly windowed for small terminals).
    List(ListViewModel),

    /// Combined detail/edit screen for one report.
    Edit(EditViewModel),
}

/// Renderable state of the list screen.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    /// Visible rows after windowing.
    pub rows: Vec<ListRow>,

    /// Empty-state message when there are no reports at all.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single list row.
#[derive(Debug, Clone)]
pub struct ListRow {
    /// Short timestamp (`08/07 14:30`).
    pub stamp: String,

    /// First line of the entry, or a placeholder label for blank entries.
    pub preview: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,

    /// Whether this row is today's entry.
    pub is_today: bool,
}

/// Renderable state of the detail/edit screen.
#[derive(Debug, Clone)]
pub struct EditViewModel {
    /// Screen heading ("New Daily Report" / "Edit Daily Report").
    pub heading: String,

    /// Full timestamp of the entry being edited.
    pub stamp: String,

    /// Identifier of the entry being edited.
    pub report_id: i64,

    /// Cursor position indicator, e.g. `(2/5)`.
    pub position: String,

    /// Buffer lines with the caret glyph already inserted.
    pub lines: Vec<String>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header bar.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active screen.
    pub keybindings: String,
}

/// One-line status message shown between body and footer.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// Message text.
    pub text: String,

    /// Whether to style the message as an error.
    pub is_error: bool,
}

/// Empty-state message shown when no reports exist.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
