use crate::app::{App, RepeatMode};
use crate::config;

/// Seed the player from the `[playback]` settings.
pub fn apply_playback_defaults(app: &mut App, settings: &config::Settings) {
    app.set_volume(settings.playback.volume);
    app.shuffle = settings.playback.shuffle;
    app.repeat = match settings.playback.repeat_mode {
        config::RepeatModeSetting::Off => RepeatMode::Off,
        config::RepeatModeSetting::RepeatAll => RepeatMode::All,
        config::RepeatModeSetting::RepeatOne => RepeatMode::One,
    };
    app.show_help = settings.ui.show_help;
}
