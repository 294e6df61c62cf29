//! Logging Infrastructure
//!
//! `tracing-subscriber` fmt output to stdout, or to a daily-rolling file
//! when a log directory is given. `RUST_LOG` overrides the level.
//! Initialising more than once is harmless: later calls are ignored.

use crate::core::SeatingConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger from configuration
pub fn init_logger_from_config(config: &SeatingConfig) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

/// Initialize the logger with optional file output.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> bool {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "seating");
            return subscriber
                .with_writer(file_appender)
                .with_ansi(false)
                .try_init()
                .is_ok();
        }
    }

    subscriber.try_init().is_ok()
}
