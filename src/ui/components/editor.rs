//! Detail/edit screen component renderer.
//!
//! Renders the edit screen: a heading, a metadata line (full timestamp,
//! entry id, list position), a separator, and the buffer lines with the
//! caret glyph already placed by the view model.

use crate::ui::helpers::truncate_chars;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EditViewModel;

/// Renders the edit screen body.
#[must_use]
pub fn render_editor(edit: &EditViewModel, theme: &Theme, cols: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(edit.lines.len() + 3);

    let mut heading = String::new();
    heading.push_str(Theme::bold());
    heading.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        heading.push_str(&Theme::bg(bg));
    }
    heading.push_str(&format!(" {} ", edit.heading));
    heading.push_str(Theme::reset());
    lines.push(heading);

    lines.push(format!(
        "{}{}  {}ID: {}  {}{}",
        Theme::fg(&theme.colors.date_fg),
        edit.stamp,
        Theme::fg(&theme.colors.text_dim),
        edit.report_id,
        edit.position,
        Theme::reset()
    ));

    lines.push(format!(
        "{}{}{}",
        Theme::fg(&theme.colors.border),
        "\u{2500}".repeat(cols.min(120)),
        Theme::reset()
    ));

    for line in &edit.lines {
        lines.push(format!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_normal),
            truncate_chars(line, cols),
            Theme::reset()
        ));
    }

    // An empty buffer still needs a visible caret row.
    if edit.lines.is_empty() {
        lines.push(format!(
            "{}\u{258c}{}",
            Theme::fg(&theme.colors.text_normal),
            Theme::reset()
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_shows_heading_meta_and_buffer() {
        let theme = Theme::default();
        let edit = EditViewModel {
            heading: "Edit Daily Report".to_string(),
            stamp: "2026-08-07 09:00".to_string(),
            report_id: 4,
            position: "(1/2)".to_string(),
            lines: vec!["Status: green\u{258c}".to_string()],
        };
        let lines = render_editor(&edit, &theme, 80);
        assert!(lines[0].contains("Edit Daily Report"));
        assert!(lines[1].contains("ID: 4"));
        assert!(lines[1].contains("(1/2)"));
        assert!(lines.iter().any(|l| l.contains("Status: green")));
    }

    #[test]
    fn empty_buffer_still_renders_a_caret_row() {
        let theme = Theme::default();
        let edit = EditViewModel {
            heading: "New Daily Report".to_string(),
            stamp: "2026-08-07 09:00".to_string(),
            report_id: 1,
            position: "(1/1)".to_string(),
            lines: vec![],
        };
        let lines = render_editor(&edit, &theme, 80);
        assert!(lines.iter().any(|l| l.contains('\u{258c}')));
    }
}
