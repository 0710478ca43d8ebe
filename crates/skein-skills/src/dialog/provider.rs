use std::sync::Arc;

use tracing::trace;

use skein_core::{BuildContext, MemorySlot, ProviderError, Skill, SkillProvider};
use skein_model::SkillSpec;

use crate::dialog::{LANGUAGE_SLOT, WAIT_FOR_INTENT, WaitForIntent, WaitForIntentConfig};

/// Provider for `wait-for-intent` skills. Needs an intent feed in the build context.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaitForIntentProvider;

impl WaitForIntentProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SkillProvider for WaitForIntentProvider {
    fn name(&self) -> &'static str {
        WAIT_FOR_INTENT
    }

    fn supports(&self, spec: &SkillSpec) -> bool {
        spec.skill == WAIT_FOR_INTENT
    }

    fn build(&self, spec: &SkillSpec, ctx: &BuildContext) -> Result<Box<dyn Skill>, ProviderError> {
        if !self.supports(spec) {
            return Err(ProviderError::UnsupportedSkill {
                provider: WAIT_FOR_INTENT,
                skill: spec.skill.clone(),
            });
        }
        let config = WaitForIntentConfig::from_options(&spec.options)?;
        trace!(slot = %spec.slot, config = %config, "building wait-for-intent skill");

        let source = ctx.intents()?.open();
        let memory = ctx.memory();
        let understood = MemorySlot::new(Arc::clone(memory), config.slot.clone());
        let language = config
            .set_language
            .then(|| MemorySlot::new(Arc::clone(memory), LANGUAGE_SLOT));

        Ok(Box::new(WaitForIntent::new(
            config,
            source,
            Arc::clone(ctx.clock()),
            understood,
            language,
        )))
    }
}
