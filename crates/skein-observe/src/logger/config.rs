use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::{LoggerFormat, LoggerLevel, LoggerTimeZone};

/// Logger configuration; every field is optional in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` expression.
    pub level: LoggerLevel,
    pub tz: LoggerTimeZone,
    /// Include module targets in text and json output.
    pub with_targets: bool,
    /// Include the current span and span list (skill, slot) in json output.
    pub with_spans: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            with_spans: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Color only when asked for, supported by the format and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && self.format.supports_color() && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = LoggerConfig::default();
        assert_eq!(cfg.format, LoggerFormat::Text);
        assert_eq!(cfg.tz, LoggerTimeZone::Utc);
        assert_eq!(cfg.level.as_str(), "info");
        assert!(cfg.with_targets);
        assert!(cfg.with_spans);
    }

    #[test]
    fn empty_object_gives_defaults() {
        let cfg: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, LoggerConfig::default());
    }

    #[test]
    fn partial_config_overrides_only_given_fields() {
        let cfg: LoggerConfig =
            serde_json::from_str(r#"{"format": "json", "level": "skein_skills=debug,info", "tz": "local"}"#)
                .unwrap();

        assert_eq!(cfg.format, LoggerFormat::Json);
        assert_eq!(cfg.level.as_str(), "skein_skills=debug,info");
        assert_eq!(cfg.tz, LoggerTimeZone::Local);
        assert!(cfg.use_color);
    }

    #[test]
    fn invalid_level_fails_deserialization() {
        assert!(serde_json::from_str::<LoggerConfig>(r#"{"level": "skein=loud"}"#).is_err());
    }

    #[test]
    fn json_never_uses_color() {
        let cfg = LoggerConfig {
            format: LoggerFormat::Json,
            ..Default::default()
        };
        assert!(!cfg.should_use_color());
    }
}
