use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::logger::LoggerError;

/// Timezone used for log timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    /// System timezone, resolved once when the logger is installed.
    Local,
}

impl LoggerTimeZone {
    /// Resolve the offset; `None` when the local offset cannot be determined.
    pub fn resolve(&self) -> Option<UtcOffset> {
        match self {
            LoggerTimeZone::Utc => Some(UtcOffset::UTC),
            LoggerTimeZone::Local => UtcOffset::current_local_offset().ok(),
        }
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerTimeZone::Utc => f.write_str("utc"),
            LoggerTimeZone::Local => f.write_str("local"),
        }
    }
}

/// RFC3339 timestamps at a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct LoggerRfc3339 {
    offset: UtcOffset,
}

impl LoggerRfc3339 {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    fn render(&self, at: OffsetDateTime) -> String {
        at.to_offset(self.offset)
            .format(&Rfc3339)
            .unwrap_or_else(|_| "<invalid-time>".to_string())
    }
}

impl Default for LoggerRfc3339 {
    fn default() -> Self {
        Self::new(UtcOffset::UTC)
    }
}

impl FormatTime for LoggerRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} ", self.render(OffsetDateTime::now_utc()))
    }
}
