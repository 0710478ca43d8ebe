//! Built-in skills and their providers.
#[cfg(feature = "face")]
pub mod face;

#[cfg(feature = "dialog")]
pub mod dialog;

#[cfg(test)]
mod testkit;

use skein_core::SkillRegistry;

/// Register every skill enabled by crate features.
#[cfg_attr(
    not(any(feature = "face", feature = "dialog")),
    allow(unused_variables)
)]
pub fn register_builtin_skills(registry: &mut SkillRegistry) {
    #[cfg(feature = "face")]
    face::register_learn_face(registry);
    #[cfg(feature = "dialog")]
    dialog::register_wait_for_intent(registry);
}
