//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise `level` is used.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}
