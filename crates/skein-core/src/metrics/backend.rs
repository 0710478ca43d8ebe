use std::sync::Arc;

use skein_model::{ExitStatus, ExitToken};

/// Skill run outcome for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillOutcome {
    /// Terminal token with `success` status.
    Success,
    /// Terminal token with `error` status.
    Error,
    /// Terminal token with `fatal` status, or a defect.
    Fatal,
    /// Run abandoned before a terminal token.
    Canceled,
}

impl SkillOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            SkillOutcome::Success => "success",
            SkillOutcome::Error => "error",
            SkillOutcome::Fatal => "fatal",
            SkillOutcome::Canceled => "canceled",
        }
    }

    /// Classify a terminal token.
    pub fn from_token(token: &ExitToken) -> Self {
        match token.status() {
            ExitStatus::Success => SkillOutcome::Success,
            ExitStatus::Error => SkillOutcome::Error,
            ExitStatus::Fatal => SkillOutcome::Fatal,
        }
    }
}

/// Backend metrics collection interface.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record that a skill was built and is about to be activated.
    fn record_skill_started(&self, skill: &str);
    /// Record the end of a run with outcome and wall duration.
    fn record_skill_completed(&self, skill: &str, outcome: SkillOutcome, duration_ms: u64);
    /// Record a notifier failure (transient or not).
    fn record_notify_error(&self, skill: &str, error_kind: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_follows_token_status() {
        assert_eq!(
            SkillOutcome::from_token(&ExitToken::success().with_suffix("yes")),
            SkillOutcome::Success
        );
        assert_eq!(
            SkillOutcome::from_token(&ExitToken::error().with_suffix("timeout")),
            SkillOutcome::Error
        );
        assert_eq!(
            SkillOutcome::from_token(&ExitToken::fatal()),
            SkillOutcome::Fatal
        );
    }
}
