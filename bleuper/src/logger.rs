// bleuper/src/logger.rs
//! Logger setup for the bleuper binary.
//!
//! The library crates only use the `log` facade; this is the one place where a
//! backend is installed.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// With `Some(level)` the given level applies to every target and `RUST_LOG`
/// is ignored. With `None`, `RUST_LOG` decides and defaults to `warn`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(true);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized; keeping the existing one.");
    }
}
