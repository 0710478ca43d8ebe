use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, ModelResult};

/// Coarse terminal status of a skill run.
///
/// Consumed by whatever sequences skills to decide on the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExitStatus {
    /// The skill achieved what it was asked to do.
    Success,
    /// The skill ended without achieving its goal (timeout, nothing understood, ...).
    Error,
    /// The skill hit an inconsistent state or lost a collaborator it cannot work without.
    Fatal,
}

impl ExitStatus {
    /// Canonical lowercase name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitStatus::Success => "success",
            ExitStatus::Error => "error",
            ExitStatus::Fatal => "fatal",
        }
    }
}

impl FromStr for ExitStatus {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(ExitStatus::Success),
            "error" => Ok(ExitStatus::Error),
            "fatal" => Ok(ExitStatus::Fatal),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of a skill: a status plus an optional processing-status suffix.
///
/// Rendered as `status` or `status.suffix`, e.g. `success.greet` or `error.timeout`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExitToken {
    status: ExitStatus,
    suffix: Option<String>,
}

impl ExitToken {
    /// Plain success token.
    pub const fn success() -> Self {
        Self {
            status: ExitStatus::Success,
            suffix: None,
        }
    }

    /// Plain error token.
    pub const fn error() -> Self {
        Self {
            status: ExitStatus::Error,
            suffix: None,
        }
    }

    /// Plain fatal token.
    pub const fn fatal() -> Self {
        Self {
            status: ExitStatus::Fatal,
            suffix: None,
        }
    }

    /// Attach a processing-status suffix, replacing any existing one.
    ///
    /// Blank suffixes are ignored.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let trimmed = suffix.trim();
        self.suffix = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn status(&self) -> ExitStatus {
        self.status
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == ExitStatus::Success
    }

    pub fn is_fatal(&self) -> bool {
        self.status == ExitStatus::Fatal
    }
}

impl From<ExitStatus> for ExitToken {
    fn from(status: ExitStatus) -> Self {
        Self {
            status,
            suffix: None,
        }
    }
}

impl fmt::Display for ExitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suffix {
            Some(suffix) => write!(f, "{}.{}", self.status, suffix),
            None => f.write_str(self.status.as_str()),
        }
    }
}

impl FromStr for ExitToken {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        let s = s.trim();
        match s.split_once('.') {
            Some((status, suffix)) => Ok(ExitToken::from(status.parse::<ExitStatus>()?)
                .with_suffix(suffix)),
            None => Ok(ExitToken::from(s.parse::<ExitStatus>()?)),
        }
    }
}

impl Serialize for ExitToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ExitToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
