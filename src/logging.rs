use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging plus a daily-rotated JSON log file.
pub fn init_logging() {
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "tips_etl.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tips_etl=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();

    // The guard must outlive the process or buffered lines are dropped.
    std::mem::forget(guard);
}
