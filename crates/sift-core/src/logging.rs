//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "SIFT_LOG";

/// Filter used when neither `SIFT_LOG` nor the config sets one
pub const DEFAULT_FILTER: &str = "sift=info,warn";

const LOG_FILE_PREFIX: &str = "sift.log";

/// Logging options taken from the `[log]` section of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `debug` or `sift_app=trace,warn`
    pub filter: Option<String>,
    /// Where the daily rolling log files go
    pub directory: Option<PathBuf>,
}

/// Initialize the logging subsystem and return the log directory
///
/// Logs go to `config.directory`, or `<data_local_dir>/sift/logs/`.
/// `SIFT_LOG` wins over the configured filter. The terminal is never
/// written to, since it is owned by the TUI.
///
/// # Examples
/// ```bash
/// SIFT_LOG=debug sift
/// SIFT_LOG=sift_app=trace sift
/// ```
pub fn init(config: &LogConfig) -> Result<PathBuf> {
    let log_dir = log_directory(config);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let directive = filter_directive(std::env::var(LOG_ENV).ok(), config.filter.as_deref());
    let (env_filter, rejected) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        "sift {} starting, logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    if let Some(e) = rejected {
        tracing::warn!("Invalid log filter {:?} ({}), using {:?}", directive, e, DEFAULT_FILTER);
    }

    Ok(log_dir)
}

/// Pick the filter directive: a non-blank environment value first, then
/// the configured one, then [`DEFAULT_FILTER`].
fn filter_directive(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| {
            configured
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn log_directory(config: &LogConfig) -> PathBuf {
    if let Some(dir) = &config.directory {
        return dir.clone();
    }
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("sift").join("logs")
}
