//! Global `tracing` subscriber setup for skein binaries.
mod config;
mod error;
mod format;
mod install;
mod level;
mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use timestamp::{LoggerRfc3339, LoggerTimeZone};

use time::UtcOffset;
use tracing::warn;

/// Install the global subscriber described by `cfg`.
///
/// Call once, early in `main()`. With `tz = local` the offset is resolved here;
/// if the platform cannot tell (common once threads are running), timestamps
/// fall back to UTC and a warning is logged.
///
/// ```rust
/// use skein_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let resolved = cfg.tz.resolve();
    let timer = LoggerRfc3339::new(resolved.unwrap_or(UtcOffset::UTC));

    match cfg.format {
        LoggerFormat::Text => install::logger_text(cfg, timer)?,
        LoggerFormat::Compact => install::logger_compact(cfg, timer)?,
        LoggerFormat::Json => install::logger_json(cfg, timer)?,
        LoggerFormat::Journald => install::logger_journald(cfg)?,
    }

    if resolved.is_none() {
        warn!(tz = %cfg.tz, "local timezone offset unavailable; logging in UTC");
    }
    Ok(())
}
