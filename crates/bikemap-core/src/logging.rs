//! File logging via tracing
//!
//! The terminal belongs to the map, so every log line goes to a daily rolling
//! file under `<data_local_dir>/bikemap/logs/`. Set `BIKEMAP_LOG` to any
//! `EnvFilter` directive to change what is recorded:
//!
//! ```bash
//! BIKEMAP_LOG=debug bikemap
//! BIKEMAP_LOG=bikemap_platform=trace,warn bikemap --headless
//! ```

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "BIKEMAP_LOG";

/// Daily files are named `bikemap.<date>.log`
const LOG_FILE_PREFIX: &str = "bikemap";
const LOG_FILE_SUFFIX: &str = "log";

/// Older daily files are removed on rotation
const MAX_LOG_FILES: usize = 7;

const DEFAULT_FILTER: &str =
    "bikemap=info,bikemap_app=info,bikemap_platform=info,bikemap_tui=info,warn";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Directory the rolling log files live in
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bikemap")
        .join("logs")
}

/// Install the global subscriber. Call once, before the engine starts.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&log_dir)
        .map_err(|e| Error::logging(format!("{}: {}", log_dir.display(), e)))?;

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %log_dir.display(),
        "bikemap logging started"
    );

    Ok(())
}

/// `BIKEMAP_LOG` if set and valid, otherwise info for the bikemap crates
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
