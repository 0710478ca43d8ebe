//! Terminal results and per-invocation step results of a skill.
mod token;
pub use token::{ExitStatus, ExitToken};

mod step;
pub use step::{FailureKind, Step};
