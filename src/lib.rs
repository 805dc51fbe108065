//! Nippo: a single-user daily-report manager for the terminal.
//!
//! Nippo lets you browse, create, edit, and dismiss dated journal entries
//! ("reports") through an interactive terminal interface. Each entry is
//! persisted as an individual JSON file keyed by its calendar day, so the
//! filesystem itself enforces one report per day and your journal stays
//! greppable plain text.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← crossterm event loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← View state machine
//! │  - Event handling (handler)                         │
//! │  - Report registry + cursor (registry)              │
//! │  - Edit session + text buffer (editor)              │
//! │  - View model computation (state)                   │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────┐            ┌───────────────┐
//! │ UI Layer      │            │ Storage Layer │
//! │ (ui/)         │            │ (storage/)    │
//! │ - Rendering   │            │ - JSON record │
//! │ - Theming     │            │   per day     │
//! └───────────────┘            └───────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Report model, errors (domain/)                   │
//! │  - Storage locations (infrastructure/)              │
//! │  - Rotating log output (observability/)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data Flow
//!
//! A keystroke enters [`handle_event`], which dispatches on the active
//! screen, mutates the edit session or registry, and asks the record store to
//! persist on save. After every write the registry re-reads persisted state:
//! disk, not memory, is the source of truth. The shim then calls the pure
//! [`ui::render`] boundary and prints the returned frame.
//!
//! # Configuration
//!
//! Optional `nippo.toml` in the working directory:
//!
//! ```toml
//! data_dir = "data"
//! theme = "catppuccin-mocha"
//! # theme_file = "/path/to/custom-theme.toml"
//! log_level = "info"
//! ```
//!
//! # Example (library use)
//!
//! ```no_run
//! use nippo::storage::{JsonRecordStore, RecordStore};
//! use nippo::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut store = JsonRecordStore::new(config.reports_dir());
//! store.init()?;
//!
//! let mut state = initialize(&config, store.load_all()?);
//! let (_rendered, actions) = handle_event(&mut state, &mut store, &Event::Char('n'))?;
//! assert!(actions.is_empty());
//! # Ok::<(), nippo::NippoError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, View};
pub use domain::{NippoError, Report, Result};
pub use ui::Theme;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Application configuration.
///
/// Loaded from an optional `nippo.toml` in the working directory; every field
/// has a sensible default so the file is not required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Data root holding the reports directory and the log file.
    ///
    /// Default: `data` (relative to the working directory).
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    ///
    /// Ignored if `theme_file` is set. Default: `catppuccin-mocha`.
    #[serde(default)]
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for the format.
    #[serde(default)]
    pub theme_file: Option<String>,

    /// Log level for the rotating log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Overridden by
    /// `RUST_LOG`. Default: `"info"`.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Default configuration file name, looked up in the working directory.
    pub const FILE_NAME: &'static str = "nippo.toml";

    /// Loads configuration from the working directory.
    ///
    /// A missing `nippo.toml` yields the defaults; an unreadable or
    /// unparsable one is an error (a present-but-broken config should not be
    /// silently ignored).
    ///
    /// # Errors
    ///
    /// Returns [`NippoError::Config`] when the file exists but cannot be read
    /// or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Loads configuration from a specific path, defaulting when absent.
    ///
    /// # Errors
    ///
    /// Returns [`NippoError::Config`] when the file exists but cannot be read
    /// or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| NippoError::Config(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| NippoError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Directory holding the per-day report records.
    #[must_use]
    pub fn reports_dir(&self) -> PathBuf {
        let data_dir = infrastructure::paths::data_dir(self.data_dir.as_deref());
        infrastructure::paths::reports_dir(&data_dir)
    }
}

/// Builds the initial application state.
///
/// Resolves the theme (custom file, then built-in name, then default; a
/// broken theme falls back rather than failing startup) and seeds the
/// registry with the reports loaded from the store.
#[must_use]
pub fn initialize(config: &Config, reports: Vec<Report>) -> AppState {
    tracing::debug!(report_count = reports.len(), "initializing nippo");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme.as_ref().map_or_else(Theme::default, |name| {
                Theme::from_name(name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(reports, theme)
}
