//! Logging configuration using tracing
//!
//! The subscriber is installed once at the entry point, which owns the
//! returned [`LogGuard`] for the life of the process. Nothing else holds
//! or reaches for a logger; layers report through the `tracing` macros.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Keeps the log sink alive and flushes it on drop.
///
/// Hold this in `main` until shutdown; dropping it earlier may lose
/// buffered log lines.
#[must_use = "dropping the guard stops log writing"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/todoli/logs/`.
/// Log level is controlled by the `TODOLI_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TODOLI_LOG=debug cargo run
/// TODOLI_LOG=trace cargo run
/// ```
pub fn init() -> Result<LogGuard> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir).unexpected()?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "todoli.log");
    let (writer, worker) = tracing_appender::non_blocking(file_appender);

    // Default to info, allow override via TODOLI_LOG
    let env_filter =
        EnvFilter::try_from_env("TODOLI_LOG").unwrap_or_else(|_| EnvFilter::new("todoli=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Todoli starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(LogGuard { _worker: worker })
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("todoli").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_rolling_appender_writes_dated_file() {
        let temp = tempdir().unwrap();

        let mut appender = RollingFileAppender::new(Rotation::DAILY, temp.path(), "todoli.log");
        writeln!(appender, "first line from the sink").unwrap();
        appender.flush().unwrap();

        // Daily rotation writes date-suffixed files: todoli.log.YYYY-MM-DD
        let mut log_files: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("todoli.log."))
            })
            .collect();

        assert_eq!(log_files.len(), 1);
        let content = std::fs::read_to_string(log_files.pop().unwrap()).unwrap();
        assert!(content.contains("first line from the sink"));
    }

    #[test]
    fn test_non_blocking_writer_flushes_on_guard_drop() {
        let temp = tempdir().unwrap();

        let appender = RollingFileAppender::new(Rotation::DAILY, temp.path(), "todoli.log");
        let (mut writer, guard) = tracing_appender::non_blocking(appender);
        writeln!(writer, "buffered line").unwrap();
        drop(guard);

        let flushed = std::fs::read_dir(temp.path()).unwrap().any(|entry| {
            std::fs::read_to_string(entry.unwrap().path())
                .map(|content| content.contains("buffered line"))
                .unwrap_or(false)
        });
        assert!(flushed);
    }
}
