//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::error::Error;
use std::path::Path;

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional JSON formatting and file output
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level
        .and_then(|l| l.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "back-office");
            let subscriber = subscriber.with_writer(file_appender).with_ansi(false);
            let result = if json.unwrap_or(false) {
                subscriber.json().try_init()
            } else {
                subscriber.try_init()
            };
            report_init(result);
            return;
        }
    }

    let result = if json.unwrap_or(false) {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
    report_init(result);
}

/// A failed install leaves the existing subscriber in charge
fn report_init(result: Result<(), Box<dyn Error + Send + Sync + 'static>>) {
    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {}", e);
    }
}
