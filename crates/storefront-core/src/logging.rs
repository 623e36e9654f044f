//! Logging configuration using tracing

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

const LOG_FILE_PREFIX: &str = "storefront.log";

/// Default filter when `STOREFRONT_LOG` is unset
const DEFAULT_FILTER: &str =
    "green_storefront=info,storefront_app=info,storefront_client=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/green-storefront/logs/`, never to the
/// terminal (the TUI owns stdout). Log level is controlled by the
/// `STOREFRONT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// STOREFRONT_LOG=debug storefront
/// STOREFRONT_LOG=storefront_client=trace storefront
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter =
        EnvFilter::try_from_env("STOREFRONT_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::debug!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("green-storefront").join("logs")
}

/// Get the log file path for the current day
///
/// The daily appender suffixes the prefix with the UTC date.
pub fn get_current_log_file() -> PathBuf {
    log_file_for(Utc::now().date_naive())
}

fn log_file_for(date: NaiveDate) -> PathBuf {
    get_log_directory().join(format!("{LOG_FILE_PREFIX}.{}", date.format("%Y-%m-%d")))
}
