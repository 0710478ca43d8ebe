//! Human-facing output (speech, display) consumed by skills.
//!
//! Failures split in two: transient I/O problems are logged and the skill
//! carries on, anything else means the skill cannot trust its own state and
//! is surfaced as [`crate::SkillError::Defect`] by [`Speaker`].
mod speaker;
pub use speaker::Speaker;

use std::fmt;

use thiserror::Error;
use tracing::info;

/// Whether a notification call waits for the output to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Return as soon as the output is queued.
    FireAndForget,
    /// Block until the output finished (bounded by the notifier).
    WaitForCompletion,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delivery::FireAndForget => f.write_str("async"),
            Delivery::WaitForCompletion => f.write_str("blocking"),
        }
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    /// Output device unavailable or write failed; safe to ignore.
    #[error("notifier io error: {0}")]
    Io(String),

    /// The output backend failed while executing the request.
    #[error("notifier execution failed: {0}")]
    Execution(String),

    /// A blocking notification was interrupted before completion.
    #[error("notification interrupted")]
    Interrupted,
}

impl NotifyError {
    /// Only I/O failures are absorbed at the boundary.
    #[inline]
    pub fn is_transient(&self) -> bool {
        matches!(self, NotifyError::Io(_))
    }

    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::Io(_) => "io",
            NotifyError::Execution(_) => "execution",
            NotifyError::Interrupted => "interrupted",
        }
    }
}

/// Output boundary used by skills to talk to humans.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, text: &str, delivery: Delivery) -> Result<(), NotifyError>;
}

/// Notifier that writes every utterance to the log.
///
/// Used by the daemon when no speech backend is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, text: &str, delivery: Delivery) -> Result<(), NotifyError> {
        info!(%delivery, text, "say");
        Ok(())
    }
}

/// Notifier that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    #[inline]
    fn notify(&self, _: &str, _: Delivery) -> Result<(), NotifyError> {
        Ok(())
    }
}
