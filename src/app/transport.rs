//! Pure transport rules.
//!
//! Nothing here touches `App`; every function maps a position (and the few
//! flags it depends on) to the next position.

use rand::Rng;

/// Rewinding past this many elapsed seconds restarts the current track
/// instead of moving to the previous one.
pub const RESTART_THRESHOLD_SECS: u32 = 3;

/// Repeat behavior, cycled `Off -> All -> One -> Off`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RepeatMode {
    #[default]
    Off,
    /// Same advance rule as `Off`; only the indicator differs.
    All,
    /// Restart the current track instead of advancing.
    One,
}

impl RepeatMode {
    pub fn cycle(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}

/// A track index together with the elapsed seconds inside it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Position {
    pub index: usize,
    pub elapsed: u32,
}

impl Position {
    pub fn start_of(index: usize) -> Self {
        Self { index, elapsed: 0 }
    }
}

/// Rewind: restart the track when past the threshold, otherwise step back
/// one entry (wrapping to the last). Shuffle is never consulted.
pub fn previous(pos: Position, len: usize) -> Position {
    if pos.elapsed > RESTART_THRESHOLD_SECS || len == 0 {
        return Position::start_of(pos.index);
    }
    let index = if pos.index == 0 { len - 1 } else { pos.index - 1 };
    Position::start_of(index)
}

/// Advance: repeat-one restarts, shuffle picks any entry uniformly (the
/// current one included), otherwise step forward with wraparound.
pub fn next<R: Rng>(
    pos: Position,
    len: usize,
    repeat: RepeatMode,
    shuffle: bool,
    rng: &mut R,
) -> Position {
    if repeat == RepeatMode::One || len == 0 {
        return Position::start_of(pos.index);
    }
    if shuffle {
        return Position::start_of(rng.random_range(0..len));
    }
    Position::start_of((pos.index + 1) % len)
}

/// One simulated second. Reaching `duration` advances via [`next`].
pub fn tick<R: Rng>(
    pos: Position,
    duration: u32,
    len: usize,
    repeat: RepeatMode,
    shuffle: bool,
    rng: &mut R,
) -> Position {
    let elapsed = pos.elapsed.saturating_add(1);
    if elapsed >= duration {
        next(pos, len, repeat, shuffle, rng)
    } else {
        Position { elapsed, ..pos }
    }
}

/// Elapsed seconds for a scrub to `percent` (clamped to 100) of `duration`.
pub fn scrub_elapsed(percent: u8, duration: u32) -> u32 {
    let percent = u64::from(percent.min(100));
    (percent * u64::from(duration) / 100) as u32
}

/// Progress through the track as a percentage in `[0, 100]`.
pub fn progress_percent(elapsed: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    (f64::from(elapsed) / f64::from(duration) * 100.0).clamp(0.0, 100.0)
}

/// Format seconds as `M:SS`; minutes are not capped.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Add a signed step to a percentage-like value, clamped to `[0, 100]`.
pub fn step_percent(value: u8, delta: i16) -> u8 {
    (i16::from(value) + delta).clamp(0, 100) as u8
}

/// Step an exact progress percentage by `delta`, rounded to a whole percent
/// and clamped to `[0, 100]`.
pub fn step_progress(percent: f64, delta: i16) -> u8 {
    (percent + f64::from(delta)).round().clamp(0.0, 100.0) as u8
}
