//! Application layer coordinating state, events, and actions.
//!
//! This module implements the view state machine that powers the interactive
//! UI, sitting between the terminal shim (`main.rs`) and the domain/storage
//! layers.
//!
//! # Architecture
//!
//! ```text
//! Key Event → Event Handler → Registry / Edit Session mutations → Actions
//!                                   │
//!                                   └── Record Store (save, reload)
//! ```
//!
//! # Modules
//!
//! - [`editor`]: Edit session and text buffer
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen and editing-target enums
//! - [`registry`]: Ordered report collection with a bounded cursor
//! - [`state`]: Central state container and view model computation

pub mod editor;
pub mod handler;
pub mod modes;
pub mod registry;
pub mod state;

pub use editor::{EditBuffer, EditSession};
pub use handler::{handle_event, Action, Event};
pub use modes::{EditTarget, View};
pub use registry::ReportRegistry;
pub use state::{AppState, StatusLine};
