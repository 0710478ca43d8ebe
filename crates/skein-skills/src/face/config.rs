use std::{fmt, time::Duration};

use skein_model::{ModelError, Options};

const KEY_LEARN_MS: &str = "learn-ms";
const KEY_POLL_MS: &str = "poll-ms";

const DEFAULT_LEARN_MS: u64 = 8_000;
const DEFAULT_POLL_MS: u64 = 500;

/// Timing of a face learning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnFaceConfig {
    /// How long the person has to hold still.
    pub learn: Duration,
    /// Delay between two checks of the timer.
    pub poll: Duration,
}

impl LearnFaceConfig {
    /// Read `learn-ms` / `poll-ms`, falling back to 8000 / 500.
    pub fn from_options(options: &Options) -> Result<Self, ModelError> {
        let cfg = Self {
            learn: Duration::from_millis(options.optional_u64(KEY_LEARN_MS, DEFAULT_LEARN_MS)?),
            poll: Duration::from_millis(options.optional_u64(KEY_POLL_MS, DEFAULT_POLL_MS)?),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rules:
    /// - `poll` is not zero.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.poll.is_zero() {
            return Err(ModelError::InvalidOption {
                key: KEY_POLL_MS.into(),
                value: "0".into(),
            });
        }
        Ok(())
    }
}

impl Default for LearnFaceConfig {
    fn default() -> Self {
        Self {
            learn: Duration::from_millis(DEFAULT_LEARN_MS),
            poll: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }
}

impl fmt::Display for LearnFaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LearnFaceConfig(learn={}ms, poll={}ms)",
            self.learn.as_millis(),
            self.poll.as_millis()
        )
    }
}
