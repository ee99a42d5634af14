use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunecard/config.toml` or `~/.config/tunecard/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNECARD__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub assets: AssetSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Starting volume, 0..=100.
    pub volume: u8,
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Starting repeat mode.
    pub repeat_mode: RepeatModeSetting,
    /// Length of one simulated second (milliseconds).
    pub tick_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 75,
            shuffle: false,
            repeat_mode: RepeatModeSetting::Off,
            tick_ms: 1000,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatModeSetting {
    #[serde(alias = "none", alias = "no-repeat")]
    Off,
    #[serde(
        alias = "all",
        alias = "repeat_all",
        alias = "loop-all",
        alias = "loop-around"
    )]
    RepeatAll,
    #[serde(alias = "one", alias = "repeat_one", alias = "loop-one")]
    RepeatOne,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Volume points added or removed by `+` / `-`.
    pub volume_step: u8,
    /// Percentage of the track skipped by `H` / `L`.
    pub scrub_step_percent: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            volume_step: 5,
            scrub_step_percent: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The title rendered on the card border.
    pub header_text: String,
    /// Whether the key help footer starts visible.
    pub show_help: bool,
    /// Whether the cover art area is drawn at all.
    pub show_cover: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " tunecard ".to_string(),
            show_help: true,
            show_cover: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory searched for `<locator>.txt` cover art before the bundled set.
    pub covers_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Whether to write a log file at all.
    pub enabled: bool,
    /// `EnvFilter` directive, e.g. `info` or `tunecard=debug`. `RUST_LOG` wins.
    pub level: String,
    /// Log directory; defaults to `$XDG_STATE_HOME/tunecard`.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            dir: None,
        }
    }
}
