use std::time::Duration;

use skein_model::SkillSpec;
use taskvisor::{BackoffPolicy, ControllerSpec, JitterPolicy, RestartPolicy, TaskRef, TaskSpec};

use super::to_admission_policy;

/// A finished skill is never run again, so restart and backoff are fixed.
fn no_backoff() -> BackoffPolicy {
    BackoffPolicy {
        first: Duration::ZERO,
        max: Duration::ZERO,
        jitter: JitterPolicy::None,
        factor: 1.0,
    }
}

/// `timeout_ms == 0` means the run is only bounded by the skill itself.
fn to_timeout(timeout_ms: u64) -> Option<Duration> {
    (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms))
}

pub fn to_task_spec(task: TaskRef, s: &SkillSpec) -> TaskSpec {
    TaskSpec::new(task, RestartPolicy::Never, no_backoff(), to_timeout(s.timeout_ms))
}

pub fn to_controller_spec(task: TaskRef, s: &SkillSpec) -> ControllerSpec {
    ControllerSpec {
        admission: to_admission_policy(s.admission),
        task_spec: to_task_spec(task, s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_disables_task_timeout() {
        assert_eq!(to_timeout(0), None);
        assert_eq!(to_timeout(9_000), Some(Duration::from_millis(9_000)));
    }
}
