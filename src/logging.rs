use crate::config::LogConfig;
use crate::consts;
use thiserror::Error;

/// Install a logger that appends to the file named in the configuration.  The
/// terminal belongs to the game while it runs, so nothing is ever logged to
/// stderr; if no log file is configured, logging stays disabled.
///
/// The filter from the configuration can be overridden with the
/// `WORDSNAKE_LOG` environment variable, using `env_logger`'s syntax.
pub(crate) fn init(cfg: &LogConfig) -> Result<(), LogError> {
    let Some(path) = cfg.file.as_deref() else {
        return Ok(());
    };
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::Open)?;
    env_logger::Builder::new()
        .filter_level(cfg.level)
        .parse_env(consts::LOG_ENV_VAR)
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    log::debug!("Logging to {} at level {}", path.display(), cfg.level);
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}
