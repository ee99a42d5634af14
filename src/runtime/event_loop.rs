use std::time::Duration;

use crossterm::event::{
    self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::App;
use crate::catalog::CoverResolver;
use crate::config;
use crate::error::Result;
use crate::runtime::keymap::{KeyCommand, command_for_key};
use crate::ticker::PlaybackClock;
use crate::ui::{self, Hit, HitMap, Slider};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Ticker driving simulated playback; only runs while playing.
    pub clock: PlaybackClock,
    /// Clickable regions from the last drawn frame.
    pub hits: HitMap,
    /// Slider grabbed by a mouse press, until the button is released.
    pub dragging: Option<Slider>,
}

impl EventLoopState {
    pub fn new(settings: &config::Settings) -> Self {
        Self {
            clock: PlaybackClock::new(Duration::from_millis(settings.playback.tick_ms)),
            hits: HitMap::default(),
            dragging: None,
        }
    }
}

/// Main terminal event loop: applies ticks, draws the card and handles
/// input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    covers: &mut CoverResolver,
    state: &mut EventLoopState,
) -> Result<()> {
    let result = drive(terminal, settings, app, covers, state);
    // The ticker must not outlive the loop, whatever ended it.
    if state.clock.is_running() {
        debug!("stopping playback clock");
    }
    state.clock.stop();
    result
}

fn drive(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    covers: &mut CoverResolver,
    state: &mut EventLoopState,
) -> Result<()> {
    loop {
        apply_ticks(app, &mut state.clock)?;

        let cover = covers.resolve(&app.current_track().cover);
        terminal.draw(|f| state.hits = ui::draw(f, app, cover, &settings.ui))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match command_for_key(key, &settings.controls) {
                        Some(KeyCommand::Quit) => {
                            info!("quit requested");
                            return Ok(());
                        }
                        Some(KeyCommand::Player(action)) => {
                            debug!(?action, "key action");
                            app.apply(action);
                        }
                        None => {}
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, state),
                _ => {}
            }
        }
    }
}

/// Bring the clock in line with the player, then apply every pending tick.
/// The clock is re-synced after each tick so an auto-advance restarts it.
pub fn apply_ticks(app: &mut App, clock: &mut PlaybackClock) -> Result<()> {
    clock.sync(app.is_playing(), app.current_index())?;
    while clock.take_tick() {
        app.tick();
        clock.sync(app.is_playing(), app.current_index())?;
    }
    Ok(())
}

/// Map a mouse event onto the last frame's hit map.
pub fn handle_mouse_event(mouse: MouseEvent, app: &mut App, state: &mut EventLoopState) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match state.hits.hit(mouse.column, mouse.row) {
            Some(Hit::Slider(slider, percent)) => {
                state.dragging = Some(slider);
                app.apply(slider.action(percent));
            }
            Some(Hit::Button(action)) => {
                debug!(?action, "click action");
                app.apply(action);
            }
            None => {}
        },
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(slider) = state.dragging {
                if let Some(percent) = state.hits.drag(slider, mouse.column) {
                    app.apply(slider.action(percent));
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => state.dragging = None,
        _ => {}
    }
}
