use std::io;

use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::catalog::{CoverResolver, sample_tracks};
use crate::error::Result;

mod event_loop;
mod keymap;
mod logging;
mod settings;
mod startup;


/// Raw mode, alternate screen and mouse capture, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
    }
}

pub fn run() -> Result<()> {
    let (settings, settings_error) = settings::load_settings();

    // Logging is optional; a broken log directory must not stop the player.
    let _log_guard = match logging::init(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("tunecard: logging disabled: {e}");
            None
        }
    };
    if let Some(e) = settings_error {
        warn!(error = %e, "failed to load config, using defaults");
    }
    info!(
        tick_ms = settings.playback.tick_ms,
        volume = settings.playback.volume,
        "starting tunecard"
    );

    let mut app = App::new(sample_tracks())?;
    startup::apply_playback_defaults(&mut app, &settings);
    let mut covers = CoverResolver::new(settings.assets.covers_dir.clone());

    let _terminal_guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut state = event_loop::EventLoopState::new(&settings);
    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut covers, &mut state);

    info!("shutting down");
    run_result
}
