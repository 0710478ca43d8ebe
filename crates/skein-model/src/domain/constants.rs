//! Well-known label keys.

/// Label key used to route a skill to a specific provider.
///
/// If a [`crate::SkillSpec`] carries `labels["provider-tag"] = "<value>"`,
/// the `SkillRegistry` only considers providers registered with the same tag.
pub const LABEL_PROVIDER_TAG: &str = "provider-tag";
