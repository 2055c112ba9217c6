//! Structured Logger
//!
//! Wraps `tracing` with environment-based level control. The gateway logs
//! to the console and a daily-rolling NDJSON file; one-shot CLI runs pass
//! no log dir and stay console-only.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global structured logger.
///
/// `RUST_LOG` wins over `level` when set. Safe to call twice; the second
/// call is a no-op.
pub fn init_logger(log_dir: Option<&Path>, level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    match log_dir {
        Some(dir) => {
            // NDJSON file, rotated daily: `<dir>/lendforge.log.YYYY-MM-DD`
            let file_appender =
                RollingFileAppender::new(Rotation::DAILY, dir, "lendforge.log");
            let file_layer = fmt::layer()
                .json()
                .with_writer(file_appender)
                .with_ansi(false);
            let _ = registry.with(file_layer).try_init();
        }
        None => {
            let _ = registry.try_init();
        }
    }
}
