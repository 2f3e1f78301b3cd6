use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

/// Routes tracing output to the log file; the terminal belongs to the TUI.
/// Keep the returned guard alive until exit so buffered records are flushed.
pub fn init(config: &LogConfig, layout: &StorageLayout) -> Result<WorkerGuard, AppError> {
    layout.ensure_dirs()?;

    let appender = tracing_appender::rolling::never(&layout.log_dir, layout.log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}
