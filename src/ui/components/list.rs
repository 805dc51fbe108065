//! Report list component renderer.
//!
//! Renders the visible window of list rows: a cursor marker, the entry's
//! short timestamp, and a one-line preview. The selected row is painted with
//! the selection background across the full terminal width; today's entry
//! gets the today highlight on its timestamp.

use crate::ui::helpers::{pad_to_width, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ListRow, ListViewModel};

/// Width reserved for the cursor marker column.
const MARKER_WIDTH: usize = 2;

/// Width of the `MM/DD HH:MM` stamp column plus its gap.
const STAMP_WIDTH: usize = 13;

/// Renders all visible list rows.
#[must_use]
pub fn render_list(list: &ListViewModel, theme: &Theme, cols: usize) -> Vec<String> {
    list.rows
        .iter()
        .map(|row| render_list_row(row, theme, cols))
        .collect()
}

fn render_list_row(row: &ListRow, theme: &Theme, cols: usize) -> String {
    let marker = if row.is_selected { "\u{25b6} " } else { "  " };
    let preview_width = cols.saturating_sub(MARKER_WIDTH + STAMP_WIDTH);
    let preview = truncate_chars(&row.preview, preview_width);

    let mut line = String::new();
    if row.is_selected {
        line.push_str(&Theme::fg(&theme.colors.selection_fg));
        line.push_str(&Theme::bg(&theme.colors.selection_bg));
        line.push_str(marker);
        line.push_str(&pad_to_width(&row.stamp, STAMP_WIDTH));
        line.push_str(&pad_to_width(&preview, preview_width));
    } else {
        line.push_str(marker);
        let date_color = if row.is_today {
            &theme.colors.today_fg
        } else {
            &theme.colors.date_fg
        };
        line.push_str(&Theme::fg(date_color));
        line.push_str(&pad_to_width(&row.stamp, STAMP_WIDTH));
        line.push_str(&Theme::fg(&theme.colors.text_normal));
        line.push_str(&pad_to_width(&preview, preview_width));
    }
    line.push_str(Theme::reset());
    line
}
