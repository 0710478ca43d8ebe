use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logger::{LoggerConfig, LoggerError, LoggerResult, LoggerRfc3339};

pub(crate) fn logger_text(cfg: &LoggerConfig, timer: LoggerRfc3339) -> LoggerResult<()> {
    let layer = fmt::layer()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(timer);

    install(tracing_subscriber::registry().with(cfg.level.to_env_filter()).with(layer))
}

pub(crate) fn logger_compact(cfg: &LoggerConfig, timer: LoggerRfc3339) -> LoggerResult<()> {
    let layer = fmt::layer()
        .compact()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(timer);

    install(tracing_subscriber::registry().with(cfg.level.to_env_filter()).with(layer))
}

pub(crate) fn logger_json(cfg: &LoggerConfig, timer: LoggerRfc3339) -> LoggerResult<()> {
    let layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_current_span(cfg.with_spans)
        .with_span_list(cfg.with_spans)
        .with_timer(timer);

    install(tracing_subscriber::registry().with(cfg.level.to_env_filter()).with(layer))
}

#[cfg(target_os = "linux")]
pub(crate) fn logger_journald(cfg: &LoggerConfig) -> LoggerResult<()> {
    let layer =
        tracing_journald::layer().map_err(|e| LoggerError::JournaldInitFailed(e.to_string()))?;

    install(tracing_subscriber::registry().with(cfg.level.to_env_filter()).with(layer))
}

#[cfg(not(target_os = "linux"))]
pub(crate) fn logger_journald(_cfg: &LoggerConfig) -> LoggerResult<()> {
    Err(LoggerError::JournaldNotSupported)
}

fn install<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LoggerFormat;

    #[test]
    #[cfg(not(target_os = "linux"))]
    fn journald_is_rejected_off_linux() {
        let cfg = LoggerConfig {
            format: LoggerFormat::Journald,
            ..Default::default()
        };
        assert!(matches!(
            logger_journald(&cfg),
            Err(LoggerError::JournaldNotSupported)
        ));
    }

    #[test]
    fn second_install_reports_already_initialized() {
        let cfg = LoggerConfig {
            format: LoggerFormat::Compact,
            use_color: false,
            ..Default::default()
        };
        // whichever call wins the global slot, the other one must fail cleanly
        let first = logger_compact(&cfg, LoggerRfc3339::default());
        let second = logger_text(&cfg, LoggerRfc3339::default());
        assert!(first.is_ok() || matches!(first, Err(LoggerError::AlreadyInitialized)));
        assert!(matches!(second, Err(LoggerError::AlreadyInitialized)));
    }
}
