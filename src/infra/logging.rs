use std::path::{Path, PathBuf};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const APP_DIR_NAME: &str = "chatpane";
const DEFAULT_LOG_FILE_NAME: &str = "chatpane.log";

/// Installs the global subscriber.
///
/// The TUI draws on the terminal, so records always go to a file. The returned
/// guard flushes the writer on drop and must live as long as the program.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let path = resolve_log_file(config);
    let appender = file_appender(&path)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

pub fn resolve_log_file(config: &LogConfig) -> PathBuf {
    log_file_in(config, dirs::cache_dir())
}

/// Without a cache dir the log lands in the working directory.
fn log_file_in(config: &LogConfig, cache_dir: Option<PathBuf>) -> PathBuf {
    if let Some(file) = &config.file {
        return file.clone();
    }

    match cache_dir {
        Some(dir) => dir.join(APP_DIR_NAME).join(DEFAULT_LOG_FILE_NAME),
        None => PathBuf::from(DEFAULT_LOG_FILE_NAME),
    }
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, AppError> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_NAME);

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|source| AppError::LogFileInit {
            path: path.to_path_buf(),
            source,
        })
}
