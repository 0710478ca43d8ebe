use std::{fmt, time::Duration};

use crate::ExitToken;

/// Why a skill gave up on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A blocking collaborator call was interrupted.
    Interrupted,
    /// A sensor or memory store could not be reached.
    Communication,
    /// The skill was driven in an order it does not support (e.g. `step` before `activate`).
    LogicFault,
}

impl FailureKind {
    /// Return label value for logs and metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            FailureKind::Interrupted => "interrupted",
            FailureKind::Communication => "communication",
            FailureKind::LogicFault => "logic_fault",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Result of a single `step` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Not finished yet; invoke again after the given delay.
    Continue(Duration),
    /// Finished with a terminal token.
    Done(ExitToken),
    /// Gave up; the driver turns this into a fatal token.
    Failed(FailureKind),
}

impl Step {
    /// Continue after `ms` milliseconds.
    #[inline]
    pub fn continue_after_ms(ms: u64) -> Self {
        Step::Continue(Duration::from_millis(ms))
    }

    /// Returns `true` for `Done` and `Failed`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Step::Continue(_))
    }
}
