//! View and editing-target state types for the application.
//!
//! This module defines the state machine enums that control which screen is
//! active and how keybindings are interpreted. The application shows one of
//! two screens; a separate editing target distinguishes composing a new
//! report from editing an existing one within the same `Edit` screen.

/// The active screen.
///
/// Controls keybinding interpretation and which body the renderer draws.
/// There is no terminal state: the process exits only on the quit command,
/// which can fire from either screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Report list with a movable cursor.
    ///
    /// Available keybindings: j/k or arrows (navigate), Enter/l (open),
    /// n (today's report, creating it if missing), q (quit).
    List,

    /// Combined detail/edit screen for the report at the cursor.
    ///
    /// Available keybindings: Ctrl+S (save), Esc (cancel), Ctrl+D (delete);
    /// every other key is forwarded to the text buffer.
    Edit,
}

/// What the active edit session points at.
///
/// Both variants carry the registry index of the report being edited. A `New`
/// target refers to a provisional, never-saved entry that is removed from the
/// registry again if the session is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Composing a brand-new report appended provisionally at `index`.
    New {
        /// Registry index of the provisional entry.
        index: usize,
    },

    /// Editing the already-persisted report at `index`.
    Existing {
        /// Registry index of the entry being edited.
        index: usize,
    },
}

impl EditTarget {
    /// Registry index this target points at.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::New { index } | Self::Existing { index } => *index,
        }
    }

    /// Whether this target is a provisional, never-saved entry.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self, Self::New { .. })
    }
}
