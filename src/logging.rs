use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::LogError;

/// Build the event filter. `RUST_LOG` wins over the configured level.
pub fn filter(level: &str) -> Result<EnvFilter, LogError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| LogError::Filter {
        filter: level.to_string(),
        reason: e.to_string(),
    })
}

/// Install a global subscriber appending to the configured log file.
///
/// Returns `Ok(false)` without installing anything when no file is set.
pub fn init(config: &LogConfig) -> Result<bool, LogError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::FileOpen {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(&config.level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)?;

    Ok(true)
}
