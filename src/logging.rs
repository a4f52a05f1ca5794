//! Logging setup.
//!
//! CLI commands log to stderr. The dashboard owns the terminal, so it logs to
//! a per-launch file under `.ticketdesk/logs/` instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{DeskError, Result};

/// Environment variable read for the log filter directives.
pub const LOG_ENV: &str = "TICKETDESK_LOG";

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_PREFIX: &str = "ticketdesk";

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Where log output goes
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    /// Directory that receives `ticketdesk_<timestamp>.log`
    File(PathBuf),
}

/// Install the global tracing subscriber.
///
/// Subsequent calls are no-ops. Failures are returned so callers can carry on
/// without logging. File logging is buffered on a worker thread: the returned
/// guard flushes it when dropped, so hold it until the program is done.
pub fn init(target: LogTarget) -> Result<Option<WorkerGuard>> {
    if INSTALLED.load(Ordering::Acquire) {
        return Ok(None);
    }

    let filter = build_env_filter();

    let guard = match target {
        LogTarget::Stderr => {
            // Unbuffered, so every line is out before the process exits
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| DeskError::Other(format!("failed to install logger: {e}")))?;
            None
        }
        LogTarget::File(dir) => {
            fs::create_dir_all(&dir)?;
            let file_name = log_file_name(jiff::Timestamp::now());
            let appender = tracing_appender::rolling::never(&dir, &file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
                .map_err(|e| DeskError::Other(format!("failed to install logger: {e}")))?;
            tracing::info!("logging to {}", log_path(&dir, &file_name).display());
            Some(guard)
        }
    };

    INSTALLED.store(true, Ordering::Release);
    Ok(guard)
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn log_file_name(now: jiff::Timestamp) -> String {
    let stamp = now.strftime("%Y-%m-%d_%H-%M-%S");
    format!("{LOG_FILE_PREFIX}_{stamp}.log")
}

fn log_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(file_name)
}
