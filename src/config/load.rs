use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::{Error, Result};

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `TUNECARD__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TUNECARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Range checks that deserialization alone cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.playback.volume > 100 {
            return Err(invalid("playback.volume", "must be between 0 and 100"));
        }
        if self.playback.tick_ms == 0 {
            return Err(invalid("playback.tick_ms", "must be >= 1"));
        }
        if !(1..=100).contains(&self.controls.volume_step) {
            return Err(invalid("controls.volume_step", "must be between 1 and 100"));
        }
        if !(1..=100).contains(&self.controls.scrub_step_percent) {
            return Err(invalid(
                "controls.scrub_step_percent",
                "must be between 1 and 100",
            ));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: &str) -> Error {
    Error::InvalidSetting {
        key,
        reason: reason.to_string(),
    }
}

/// Resolve the config path from `TUNECARD_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TUNECARD_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tunecard/config.toml`
/// or `~/.config/tunecard/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tunecard").join("config.toml"))
}

/// Directory for log files: `$XDG_STATE_HOME/tunecard` or `~/.local/state/tunecard`.
pub fn default_state_dir() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("tunecard"))
}
