//! Terminal shim and process entry point.
//!
//! This is the thin integration layer between the nippo library and the
//! terminal: it owns raw mode and the alternate screen, maps crossterm input
//! 1:1 onto library [`Event`]s, prints the frames produced by the pure render
//! boundary, and executes the [`Action`]s the state machine returns. All
//! decisions live in the library; nothing here inspects application state.
//!
//! # Startup
//!
//! 1. Load `nippo.toml` (optional) and initialize tracing
//! 2. Initialize the record store; failure aborts with a diagnostic and a
//!    non-zero exit code
//! 3. Load all persisted reports and build the initial state
//! 4. Enter the event loop until the state machine emits [`Action::Quit`]

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::execute;

use nippo::storage::{JsonRecordStore, RecordStore};
use nippo::{handle_event, initialize, observability, ui, Action, AppState, Config, Event};

fn main() {
    if let Err(e) = run() {
        eprintln!("nippo: {e}");
        std::process::exit(1);
    }
}

fn run() -> nippo::Result<()> {
    let config = Config::load()?;
    observability::init_tracing(&config);
    tracing::debug!("starting nippo");

    let mut store = JsonRecordStore::new(config.reports_dir());
    store.init()?;
    let reports = store.load_all()?;

    let mut state = initialize(&config, reports);
    if let Ok((cols, rows)) = terminal::size() {
        state.resize(rows as usize, cols as usize);
    }

    let mut terminal = TerminalGuard::enter()?;
    terminal.draw(&state)?;

    loop {
        let Some(event) = map_event(event::read()?) else {
            continue;
        };

        let (should_render, actions) = handle_event(&mut state, &mut store, &event)?;

        if actions.contains(&Action::Quit) {
            tracing::debug!("quit requested");
            break;
        }
        if should_render {
            terminal.draw(&state)?;
        }
    }

    Ok(())
}

/// Maps one terminal event onto a library event.
///
/// Returns `None` for events the state machine has no representation for
/// (key releases, mouse input, unmapped control chords).
fn map_event(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return match key.code {
                    KeyCode::Char('s') => Some(Event::CtrlS),
                    KeyCode::Char('d') => Some(Event::CtrlD),
                    KeyCode::Char('c') => Some(Event::CtrlC),
                    _ => None,
                };
            }
            match key.code {
                KeyCode::Up => Some(Event::Up),
                KeyCode::Down => Some(Event::Down),
                KeyCode::Left => Some(Event::Left),
                KeyCode::Right => Some(Event::Right),
                KeyCode::Enter => Some(Event::Enter),
                KeyCode::Esc => Some(Event::Esc),
                KeyCode::Backspace => Some(Event::Backspace),
                KeyCode::Char(ch) => Some(Event::Char(ch)),
                _ => None,
            }
        }
        TermEvent::Resize(cols, rows) => Some(Event::Resize { rows, cols }),
        _ => None,
    }
}

/// Raw-mode/alternate-screen guard.
///
/// Restores the terminal on drop so a panic or early return never leaves the
/// user's shell in raw mode.
struct TerminalGuard {
    stdout: io::Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    /// Clears the screen and prints the frame for the current state.
    fn draw(&mut self, state: &AppState) -> io::Result<()> {
        let frame = ui::render(state, state.rows, state.cols);
        execute!(
            self.stdout,
            MoveTo(0, 0),
            Clear(ClearType::All),
            Print(frame)
        )?;
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
