//! Header component renderer.
//!
//! Renders the title bar: application title plus entry count, bold on the
//! theme's header background, padded to the full terminal width.

use crate::ui::helpers::pad_to_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar as a single styled line.
#[must_use]
pub fn render_header(header: &HeaderInfo, theme: &Theme, cols: usize) -> String {
    let text = pad_to_width(&header.title, cols);

    let mut line = String::new();
    line.push_str(Theme::bold());
    line.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        line.push_str(&Theme::bg(bg));
    }
    line.push_str(&text);
    line.push_str(Theme::reset());
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_title_and_resets_styling() {
        let theme = Theme::default();
        let header = HeaderInfo {
            title: " Daily Reports (3) ".to_string(),
        };
        let line = render_header(&header, &theme, 40);
        assert!(line.contains("Daily Reports (3)"));
        assert!(line.ends_with(Theme::reset()));
    }
}
