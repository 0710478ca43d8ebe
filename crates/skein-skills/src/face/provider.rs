use std::sync::Arc;

use tracing::trace;

use skein_core::{BuildContext, ProviderError, Skill, SkillProvider, Speaker};
use skein_model::SkillSpec;

use crate::face::{LEARN_FACE, LearnFace, LearnFaceConfig};

/// Provider for `learn-face` skills.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnFaceProvider;

impl LearnFaceProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SkillProvider for LearnFaceProvider {
    fn name(&self) -> &'static str {
        LEARN_FACE
    }

    fn supports(&self, spec: &SkillSpec) -> bool {
        spec.skill == LEARN_FACE
    }

    fn build(&self, spec: &SkillSpec, ctx: &BuildContext) -> Result<Box<dyn Skill>, ProviderError> {
        if !self.supports(spec) {
            return Err(ProviderError::UnsupportedSkill {
                provider: LEARN_FACE,
                skill: spec.skill.clone(),
            });
        }
        let config = LearnFaceConfig::from_options(&spec.options)?;
        trace!(slot = %spec.slot, config = %config, "building learn-face skill");

        let speaker = Speaker::new(
            LEARN_FACE,
            Arc::clone(ctx.notifier()),
            Arc::clone(ctx.metrics()),
        );
        let skill = LearnFace::new(config, speaker, Arc::clone(ctx.clock()))?;
        Ok(Box::new(skill))
    }
}
