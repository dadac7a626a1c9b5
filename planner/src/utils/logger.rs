//! Logging Infrastructure
//!
//! Console output (pretty for development, JSON for production) plus an
//! optional daily rotating file under `log_dir`.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name prefix of the rotating log
const LOG_FILE_PREFIX: &str = "planner";

/// Initialize the logging system
///
/// `RUST_LOG`, when set, overrides `level`.
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// planner::utils::logger::init_logger("debug", false, None)?;
///
/// // Production setup (console + file)
/// planner::utils::logger::init_logger("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(appender))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_dir_and_rejects_second_init() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let log_dir = log_dir.to_str().unwrap();

        // First init may lose to another test in the same process; the
        // directory is created either way.
        let _ = init_logger("debug", false, Some(log_dir));
        assert!(Path::new(log_dir).is_dir());

        assert!(init_logger("info", true, None).is_err());
    }
}
