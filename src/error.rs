//! Error types shared by startup, configuration and terminal handling.

use thiserror::Error;

/// Errors that can stop `tunecard` from starting or tearing down cleanly.
#[derive(Debug, Error)]
pub enum Error {
    /// The player was constructed without any tracks.
    #[error("track catalog is empty")]
    EmptyCatalog,

    /// Terminal or filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Layered configuration could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    /// A configuration value was read but is out of range.
    #[error("invalid setting `{key}`: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    /// The log filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// The rolling log file could not be opened.
    #[error("failed to open log file: {0}")]
    LogFile(#[from] tracing_appender::rolling::InitError),

    /// A global tracing subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, Error>;
