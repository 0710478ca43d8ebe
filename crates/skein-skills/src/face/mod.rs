//! Face enrolment skills.
//!
//! `learn-face` asks the person to look into the camera, holds still for the
//! learning interval and thanks them. Capture and storage of the face itself
//! belong to the vision pipeline, not to this skill.
mod config;
mod provider;
mod skill;

pub use config::LearnFaceConfig;
pub use provider::LearnFaceProvider;
pub use skill::LearnFace;

use std::sync::Arc;

use skein_core::SkillRegistry;

/// Skill name handled by [`LearnFaceProvider`].
pub const LEARN_FACE: &str = "learn-face";

/// Register the `learn-face` provider in the given registry.
pub fn register_learn_face(registry: &mut SkillRegistry) {
    registry.register(Arc::new(LearnFaceProvider::new()));
}
