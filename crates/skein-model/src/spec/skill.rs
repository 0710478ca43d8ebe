use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    LABEL_PROVIDER_TAG, Labels, Options,
    domain::{Slot, TimeoutMs},
    strategy::AdmissionStrategy,
};

/// Declarative request to run one skill.
///
/// `SkillSpec` describes *which* skill to run, *with what options*, and how the
/// supervisor should treat it (`slot`, `admission`, `timeout_ms`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SkillSpec {
    /// Provider name used to build the skill (e.g. `"learn-face"`).
    pub skill: String,
    /// Logical slot name used for concurrency control.
    ///
    /// Skills sharing a slot share a single execution lane.
    pub slot: Slot,
    /// Skill-specific options.
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    /// Hard timeout for the whole run in milliseconds; `0` disables it.
    #[serde(default)]
    pub timeout_ms: TimeoutMs,
    /// What happens when the slot is already busy.
    #[serde(default)]
    pub admission: AdmissionStrategy,
    /// Routing metadata.
    ///
    /// The registry uses key `provider-tag` (if present) to select a specific provider among those that support the skill.
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}

impl SkillSpec {
    /// Spec with empty options, no timeout and default admission.
    pub fn new(skill: impl Into<String>, slot: impl Into<Slot>) -> Self {
        Self {
            skill: skill.into(),
            slot: slot.into(),
            options: Options::new(),
            timeout_ms: 0,
            admission: AdmissionStrategy::default(),
            labels: Labels::new(),
        }
    }

    /// Add a single option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key, value);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: TimeoutMs) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_admission(mut self, admission: AdmissionStrategy) -> Self {
        self.admission = admission;
        self
    }

    /// Attach a provider tag label used by the registry.
    pub fn with_provider_tag(mut self, tag: impl Into<String>) -> Self {
        self.labels.insert(LABEL_PROVIDER_TAG, tag);
        self
    }

    /// Return the provider tag label (if present).
    pub fn provider_tag(&self) -> Option<&str> {
        self.labels.get(LABEL_PROVIDER_TAG)
    }
}
