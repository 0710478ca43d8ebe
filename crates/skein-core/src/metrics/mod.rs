//! Metrics collection abstraction for skill runs.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected via [`crate::BuildContext`].
mod backend;
pub use backend::{MetricsBackend, MetricsHandle, SkillOutcome};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
