//! Empty state component renderer.
//!
//! Shown when no reports exist yet: a centered message with a dimmed hint
//! underneath.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty-state block.
#[must_use]
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "{}{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.empty_state_fg),
            center(&empty.message, cols),
            Theme::reset()
        ),
        format!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            center(&empty.subtitle, cols),
            Theme::reset()
        ),
    ]
}
