//! Application model types: `App` and `PlaybackState`.
//!
//! The `App` struct holds the catalog, the current position and every flag
//! the card renders. All mutations go through its methods so the position
//! always stays inside the catalog and the current track.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::action::Action;
use super::transport::{self, Position, RepeatMode};
use crate::catalog::Track;
use crate::error::{Error, Result};

/// Volume a fresh player starts with.
pub const DEFAULT_VOLUME: u8 = 75;

/// Whether the simulated clock is running.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    Playing,
    #[default]
    Paused,
}

/// The player state holder.
pub struct App {
    pub tracks: Vec<Track>,
    position: Position,
    pub playback: PlaybackState,
    volume: u8,
    pub muted: bool,
    /// Session-wide, not tied to the current track.
    pub liked: bool,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub show_help: bool,
    rng: StdRng,
}

impl App {
    /// Create a new `App` over `tracks`, seeding shuffle from the OS.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        Self::with_rng(tracks, StdRng::from_os_rng())
    }

    /// Create a new `App` with an explicit random source for shuffle picks.
    pub fn with_rng(tracks: Vec<Track>, rng: StdRng) -> Result<Self> {
        if tracks.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        Ok(Self {
            tracks,
            position: Position::default(),
            playback: PlaybackState::Paused,
            volume: DEFAULT_VOLUME,
            muted: false,
            liked: false,
            shuffle: false,
            repeat: RepeatMode::Off,
            show_help: true,
            rng,
        })
    }

    pub fn current_index(&self) -> usize {
        self.position.index
    }

    pub fn current_track(&self) -> &Track {
        &self.tracks[self.position.index]
    }

    /// Simulated playback position in whole seconds.
    pub fn elapsed(&self) -> u32 {
        self.position.elapsed
    }

    /// Stored volume; unaffected by muting.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Volume the slider shows: zero while muted.
    pub fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume }
    }

    /// True when the muted icon should be shown.
    pub fn is_silent(&self) -> bool {
        self.muted || self.volume == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    pub fn progress_percent(&self) -> f64 {
        transport::progress_percent(self.position.elapsed, self.current_track().duration)
    }

    pub fn elapsed_label(&self) -> String {
        transport::format_time(self.position.elapsed)
    }

    pub fn total_label(&self) -> String {
        transport::format_time(self.current_track().duration)
    }

    /// Execute a user-level action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::PlayPause => self.toggle_playback(),
            Action::Previous => self.previous(),
            Action::Next => self.next(),
            Action::ScrubTo(percent) => self.scrub(percent),
            Action::ScrubBy(delta) => {
                self.scrub(transport::step_progress(self.progress_percent(), delta));
            }
            Action::SetVolume(volume) => self.set_volume(volume),
            Action::VolumeBy(delta) => self.set_volume(transport::step_percent(self.volume, delta)),
            Action::ToggleMute => self.toggle_mute(),
            Action::ToggleLike => self.toggle_like(),
            Action::ToggleShuffle => self.toggle_shuffle(),
            Action::CycleRepeat => self.cycle_repeat(),
            Action::Select(index) => {
                self.select(index);
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
        }
    }

    /// Flip between playing and paused; the position is untouched.
    pub fn toggle_playback(&mut self) {
        self.playback = match self.playback {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        };
        debug!(state = ?self.playback, "playback toggled");
    }

    /// Restart the track, or step back one entry near its start.
    pub fn previous(&mut self) {
        self.move_to(transport::previous(self.position, self.tracks.len()));
    }

    /// Advance according to repeat and shuffle.
    pub fn next(&mut self) {
        let pos = transport::next(
            self.position,
            self.tracks.len(),
            self.repeat,
            self.shuffle,
            &mut self.rng,
        );
        self.move_to(pos);
    }

    /// One simulated second of playback. Ignored while paused.
    pub fn tick(&mut self) {
        if !self.is_playing() {
            return;
        }
        let pos = transport::tick(
            self.position,
            self.current_track().duration,
            self.tracks.len(),
            self.repeat,
            self.shuffle,
            &mut self.rng,
        );
        self.move_to(pos);
    }

    /// Jump to `percent` of the current track.
    pub fn scrub(&mut self, percent: u8) {
        self.position.elapsed = transport::scrub_elapsed(percent, self.current_track().duration);
    }

    /// Set the volume (clamped to 100) and always unmute.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.muted = false;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    /// Flip shuffle. The catalog order never changes.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    /// Cycle repeat through `Off -> All -> One`.
    pub fn cycle_repeat(&mut self) {
        self.repeat = self.repeat.cycle();
    }

    /// Jump to `index` from the start, keeping the playback state.
    ///
    /// Returns `false` (and changes nothing) when `index` is outside the catalog.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tracks.len() {
            debug!(index, "ignoring selection outside the catalog");
            return false;
        }
        self.move_to(Position::start_of(index));
        true
    }

    fn move_to(&mut self, pos: Position) {
        if pos.index != self.position.index {
            debug!(
                from = self.position.index,
                to = pos.index,
                id = self.tracks[pos.index].id,
                "track changed"
            );
        }
        self.position = pos;
    }
}
