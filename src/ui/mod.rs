//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into styled terminal frames through a
//! declarative pipeline:
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel → render → frame String
//! ```
//!
//! The render boundary is pure: no I/O, no globals; the theme travels in as
//! part of the state. The terminal shim owns printing.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared text utilities (padding, truncation, centering)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyViewModel, EditViewModel, EmptyState, FooterInfo, HeaderInfo, ListRow, ListViewModel,
    StatusInfo, UiViewModel,
};
