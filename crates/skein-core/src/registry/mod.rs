//! Skill registry that selects an appropriate [`SkillProvider`] for a given [`SkillSpec`].
//!
//! Providers are checked in registration order. The first one that reports
//! `supports(spec) == true` and matches the `provider-tag` label (if any) builds the skill.
use std::sync::Arc;

use skein_model::{LABEL_PROVIDER_TAG, Labels, SkillSpec};
use tracing::{debug, instrument, trace};

use crate::{
    error::CoreError,
    provider::{BuildContext, SkillProvider},
    skill::Skill,
};

/// Single provider entry with static labels used for routing.
pub struct ProviderEntry {
    pub provider: Arc<dyn SkillProvider>,
    pub labels: Labels,
}

/// Ordered set of providers plus the context they build with.
#[derive(Default)]
pub struct SkillRegistry {
    providers: Vec<ProviderEntry>,
    ctx: BuildContext,
}

impl SkillRegistry {
    /// Create an empty registry with a default build context.
    #[inline]
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            ctx: BuildContext::default(),
        }
    }

    /// Set the build context shared by all providers.
    #[inline]
    pub fn with_context(mut self, ctx: BuildContext) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn context(&self) -> &BuildContext {
        &self.ctx
    }

    /// Register a provider without labels.
    #[inline]
    pub fn register(&mut self, provider: Arc<dyn SkillProvider>) {
        self.providers.push(ProviderEntry {
            provider,
            labels: Labels::default(),
        });
    }

    /// Register a provider with static labels, matched against [`SkillSpec::provider_tag`].
    #[inline]
    pub fn register_with_labels(&mut self, provider: Arc<dyn SkillProvider>, labels: Labels) {
        self.providers.push(ProviderEntry { provider, labels });
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Pick the first provider that supports the spec and matches its provider tag.
    pub fn pick(&self, spec: &SkillSpec) -> Option<&Arc<dyn SkillProvider>> {
        let wanted = spec.provider_tag();

        self.providers
            .iter()
            .filter(|entry| entry.provider.supports(spec))
            .filter(move |entry| match wanted {
                Some(wanted) => entry.labels.get(LABEL_PROVIDER_TAG) == Some(wanted),
                None => true,
            })
            .map(|entry| &entry.provider)
            .next()
    }

    /// Like [`SkillRegistry::pick`], but owned and with an error when nothing matches.
    pub fn resolve(&self, spec: &SkillSpec) -> Result<Arc<dyn SkillProvider>, CoreError> {
        self.pick(spec)
            .cloned()
            .ok_or_else(|| CoreError::NoProvider(spec.skill.clone()))
    }

    /// Build a fresh skill for the spec with the registry context.
    #[instrument(level = "debug", skip(self, spec), fields(skill = %spec.skill, slot = %spec.slot))]
    pub fn build(&self, spec: &SkillSpec) -> Result<Box<dyn Skill>, CoreError> {
        trace!(spec = ?spec, "registry received spec");

        let provider = self.resolve(spec)?;
        let skill = provider.build(spec, &self.ctx)?;
        debug!(provider = provider.name(), "provider built skill successfully");
        Ok(skill)
    }

    /// Returns `true` if at least one registered provider advertises the given tag.
    pub fn contains_provider_tag(&self, tag: &str) -> bool {
        self.providers
            .iter()
            .any(|e| e.labels.get(LABEL_PROVIDER_TAG) == Some(tag))
    }
}
