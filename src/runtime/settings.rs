use crate::config;
use crate::error::Error;

/// Load and validate settings. On failure the defaults are returned together
/// with the error, so it can be logged once logging is up.
pub fn load_settings() -> (config::Settings, Option<Error>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => (config::Settings::default(), Some(e)),
        },
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (config::Settings::default(), Some(e)),
    }
}
