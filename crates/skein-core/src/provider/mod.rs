//! Provider abstraction used by the registry to build skills from a [`SkillSpec`].
//!
//! Concrete providers live in `skein-skills` and are plugged into the registry.
mod error;
pub use error::ProviderError;

mod context;
pub use context::BuildContext;

mod id;
pub use id::make_run_id;

use skein_model::SkillSpec;

use crate::skill::Skill;

/// Factory for one family of skills.
///
/// A provider:
/// - decides whether it can handle a given [`SkillSpec`] (`supports`)
/// - builds a fresh, not yet activated [`Skill`] from it (`build`)
pub trait SkillProvider: Send + Sync {
    /// Provider name used in logs, metrics and run ids.
    fn name(&self) -> &'static str;

    /// Returns `true` if this provider can handle the given spec.
    fn supports(&self, spec: &SkillSpec) -> bool;

    /// Build a new skill instance. Option errors surface here, before anything runs.
    fn build(&self, spec: &SkillSpec, ctx: &BuildContext) -> Result<Box<dyn Skill>, ProviderError>;
}
