//! The unit of robot behaviour driven by a scheduler.
//!
//! A skill is activated once, stepped until it reports a terminal [`Step`],
//! and finalized once with that terminal token. Stepping never blocks: a skill
//! that is not done yet returns [`Step::Continue`] with the delay it wants
//! before the next call, and the driver does the waiting.
mod error;
pub use error::SkillError;

use skein_model::{ExitToken, Step};

/// Timed, resumable unit of work.
///
/// Call order is fixed: `activate` once, `step` until terminal, `finalize` once.
/// `finalize` is skipped when the run is abandoned (cancelled or timed out).
pub trait Skill: Send {
    /// Skill name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// One-time setup before the first `step`.
    ///
    /// May block for one bounded notifier call. Errors are unrecoverable defects only.
    fn activate(&mut self) -> Result<(), SkillError>;

    /// Advance the skill.
    ///
    /// Once a terminal step has been returned, further calls must return the same result.
    fn step(&mut self) -> Step;

    /// Unconditional cleanup after the terminal step.
    ///
    /// Returns the token it was given unless the skill has a reason to rewrite it.
    fn finalize(&mut self, token: ExitToken) -> Result<ExitToken, SkillError>;
}
