//! Top-level rendering coordinator.
//!
//! This module provides the render boundary: a pure function from application
//! state and terminal dimensions to a full frame string. It performs no I/O
//! and has no side effects; the terminal shim clears the screen and prints
//! whatever is returned after every state change.
//!
//! # Architecture
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UiViewModel`
//! 2. **Component Rendering**: delegate each view model piece to a component,
//!    assemble the styled lines, and pad the frame to the terminal height.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyViewModel, StatusInfo, UiViewModel};

/// Renders the current state into a full terminal frame.
///
/// The returned string contains exactly `rows` lines joined with `\r\n`
/// (raw-mode line endings), each styled with the theme carried in the state.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let rows = rows.max(3);
    let mut lines = Vec::with_capacity(rows);

    lines.push(components::render_header(&vm.header, theme, cols));
    lines.push(String::new());

    match &vm.body {
        BodyViewModel::List(list) => match &list.empty_state {
            Some(empty) => lines.extend(components::render_empty_state(empty, theme, cols)),
            None => lines.extend(components::render_list(list, theme, cols)),
        },
        BodyViewModel::Edit(edit) => lines.extend(components::render_editor(edit, theme, cols)),
    }

    // Pin the status and footer to the bottom of the frame.
    let body_rows = rows - 2;
    lines.truncate(body_rows);
    while lines.len() < body_rows {
        lines.push(String::new());
    }

    lines.push(render_status(vm.status.as_ref(), theme));
    lines.push(components::render_footer(&vm.footer, theme, cols));

    lines.join("\r\n")
}

fn render_status(status: Option<&StatusInfo>, theme: &Theme) -> String {
    let Some(status) = status else {
        return String::new();
    };

    let color = if status.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.success_fg
    };
    format!("{}{}{}", Theme::fg(color), status.text, Theme::reset())
}
