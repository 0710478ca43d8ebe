//! Dialog skills driven by understood utterances.
//!
//! `wait-for-intent` listens to the intent feed until something it was told
//! to wait for is understood, stores that understanding and exits with a token
//! naming the intent.
mod config;
mod provider;
mod skill;

pub use config::{IntentMatch, WaitForIntentConfig};
pub use provider::WaitForIntentProvider;
pub use skill::WaitForIntent;

use std::sync::Arc;

use skein_core::SkillRegistry;

/// Skill name handled by [`WaitForIntentProvider`].
pub const WAIT_FOR_INTENT: &str = "wait-for-intent";

/// Memory key the language of the understanding is written to.
pub const LANGUAGE_SLOT: &str = "Language";

/// Register the `wait-for-intent` provider in the given registry.
pub fn register_wait_for_intent(registry: &mut SkillRegistry) {
    registry.register(Arc::new(WaitForIntentProvider::new()));
}
