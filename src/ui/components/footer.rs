//! Footer component renderer.
//!
//! Renders the footer help bar with centered keybinding hints in the dimmed
//! text color.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar as a single styled line.
///
/// Hints wider than the terminal are truncated to keep the layout intact on
/// narrow terminals.
#[must_use]
pub fn render_footer(footer: &FooterInfo, theme: &Theme, cols: usize) -> String {
    let text = center(&footer.keybindings, cols);
    format!("{}{}{}", Theme::fg(&theme.colors.text_dim), text, Theme::reset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_centers_the_hints() {
        let theme = Theme::default();
        let footer = FooterInfo {
            keybindings: "q: quit".to_string(),
        };
        let line = render_footer(&footer, &theme, 21);
        assert!(line.contains("q: quit"));
    }
}
