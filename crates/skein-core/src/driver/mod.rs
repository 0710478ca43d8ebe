//! Cooperative driver for a single [`Skill`] run.
//!
//! This is the scheduler side of the skill contract: activate once, step until
//! a terminal result while sleeping the requested delay between calls, then
//! finalize once. Cancellation abandons the run without finalizing it.
use thiserror::Error;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, trace, warn};

use skein_model::{ExitToken, FailureKind, Step};

use crate::skill::{Skill, SkillError};

#[derive(Debug, Error)]
pub enum RunError {
    /// Run abandoned before finalize.
    #[error("skill run canceled")]
    Canceled,

    /// Unrecoverable defect raised by activate or finalize.
    #[error(transparent)]
    Defect(#[from] SkillError),
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Token returned by `finalize`.
    pub token: ExitToken,
    /// Number of `Continue` steps before the terminal one.
    pub continues: u64,
    /// Set when the terminal step was `Failed`.
    pub failure: Option<FailureKind>,
}

/// Drive `skill` to completion.
///
/// The first `step` happens right after `activate`; every `Continue(delay)` is
/// honoured with a timer sleep, never a busy wait.
#[instrument(level = "debug", skip_all, fields(skill = skill.name()))]
pub async fn run_skill(
    skill: &mut dyn Skill,
    cancel: &CancellationToken,
) -> Result<RunSummary, RunError> {
    if cancel.is_cancelled() {
        return Err(RunError::Canceled);
    }

    skill.activate()?;
    debug!("skill activated");

    let mut continues = 0u64;
    let mut failure = None;
    let terminal = loop {
        match skill.step() {
            Step::Continue(delay) => {
                continues += 1;
                trace!(delay_ms = delay.as_millis() as u64, continues, "skill continues");
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!(continues, "cancellation requested; abandoning skill");
                        return Err(RunError::Canceled);
                    }
                    _ = sleep(delay) => {}
                }
            }
            Step::Done(token) => break token,
            Step::Failed(kind) => {
                warn!(kind = %kind, "skill step failed");
                failure = Some(kind);
                break ExitToken::fatal();
            }
        }
    };

    let token = skill.finalize(terminal)?;
    debug!(token = %token, continues, "skill finished");
    Ok(RunSummary {
        token,
        continues,
        failure,
    })
}
