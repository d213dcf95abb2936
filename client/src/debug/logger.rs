//! Logging initialization

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "artmarket_client=info,artmarket=info,warn";

/// Directory for the rotating log file; unset means stderr only.
pub const ENV_LOG_DIR: &str = "ARTMARKET_LOG_DIR";

const LOG_FILE_PREFIX: &str = "artmarket.log";

/// Initialize the logging system
///
/// Sets up:
/// - an `EnvFilter` from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
/// - compact human output on stderr
/// - when `ARTMARKET_LOG_DIR` is set, a daily-rotated file written off-thread
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// lines are flushed. Calling this twice is harmless: the second call finds a
/// subscriber already installed and does nothing.
pub fn init() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match log_dir() {
        Some(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .boxed();
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory {}: {e}", dir.display());
                (None, None)
            }
        },
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(log_dir = ?log_dir(), "Logging initialized");
    }
    guard
}

fn log_dir() -> Option<PathBuf> {
    lib_utils::get_env(ENV_LOG_DIR).ok().map(PathBuf::from)
}
