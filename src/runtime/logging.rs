use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LoggingSettings, default_state_dir};
use crate::error::Result;

const MAX_LOG_FILES: usize = 7;

/// Install the global subscriber writing to a daily-rolling file.
///
/// stdout belongs to the terminal UI, so nothing is logged there. Returns
/// `None` when logging is disabled or no log directory can be determined;
/// the returned guard must be held until exit so buffered lines are flushed.
pub fn init(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    if !settings.enabled {
        return Ok(None);
    }
    let Some(dir) = settings.dir.clone().or_else(default_state_dir) else {
        return Ok(None);
    };
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("tunecard")
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    Ok(Some(guard))
}
