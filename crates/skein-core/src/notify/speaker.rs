use std::{fmt, sync::Arc};

use tracing::warn;

use crate::{
    metrics::MetricsHandle,
    notify::{Delivery, Notifier},
    skill::SkillError,
};

/// Per-skill handle over a [`Notifier`] that applies the error policy.
///
/// - I/O errors: logged at `warn`, counted, swallowed.
/// - Execution errors and interruptions: returned as [`SkillError::Defect`].
#[derive(Clone)]
pub struct Speaker {
    skill: &'static str,
    notifier: Arc<dyn Notifier>,
    metrics: MetricsHandle,
}

impl Speaker {
    pub fn new(skill: &'static str, notifier: Arc<dyn Notifier>, metrics: MetricsHandle) -> Self {
        Self {
            skill,
            notifier,
            metrics,
        }
    }

    /// Say `text` with the requested delivery mode.
    pub fn say(&self, text: &str, delivery: Delivery) -> Result<(), SkillError> {
        match self.notifier.notify(text, delivery) {
            Ok(()) => Ok(()),
            Err(e) if e.is_transient() => {
                self.metrics.record_notify_error(self.skill, e.as_label());
                warn!(skill = self.skill, text, error = %e, "notification failed; continuing");
                Ok(())
            }
            Err(e) => {
                self.metrics.record_notify_error(self.skill, e.as_label());
                Err(SkillError::Defect {
                    skill: self.skill,
                    reason: e.to_string(),
                })
            }
        }
    }
}

impl fmt::Debug for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speaker")
            .field("skill", &self.skill)
            .field("notifier", &"<dyn Notifier>")
            .finish()
    }
}
