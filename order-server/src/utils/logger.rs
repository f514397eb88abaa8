//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies.
//! With a log directory, output goes to a daily rolling file instead of stdout.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info` on stdout
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Calling it more than once is harmless; only the first subscriber is kept.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = build_filter(log_level);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = existing_log_dir(log_dir) {
        let file_appender = tracing_appender::rolling::daily(dir, "order-server");
        let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
        return;
    }

    let _ = subscriber.try_init();
}

fn build_filter(log_level: Option<&str>) -> EnvFilter {
    let level = log_level.unwrap_or("info");
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("order_server={level},tower_http={level},{level}")))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log directory, only when it already exists
fn existing_log_dir(log_dir: Option<&str>) -> Option<&Path> {
    log_dir.map(Path::new).filter(|p| p.is_dir())
}
