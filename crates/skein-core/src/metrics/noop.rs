use crate::metrics::backend::{MetricsBackend, SkillOutcome};

/// Metrics backend that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_skill_started(&self, _: &str) {}

    #[inline(always)]
    fn record_skill_completed(&self, _: &str, _: SkillOutcome, _: u64) {}

    #[inline(always)]
    fn record_notify_error(&self, _: &str, _: &str) {}
}
