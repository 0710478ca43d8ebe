//! Taskvisor event log for skill runs.
//!
//! Every supervised task is one skill run named by its run id, so events are
//! reported in those terms. A task failure is a skill that ended with an
//! `error` token, which is an ordinary outcome and logged as a warning; fatal
//! endings are errors.
use async_trait::async_trait;
use taskvisor::{Event, EventKind, Subscribe};
use tracing::{debug, error, info, trace, warn};

const QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Subscriber that writes supervisor events to `tracing`.
#[derive(Debug, Default)]
pub struct SkillEventLog;

impl SkillEventLog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for SkillEventLog {
    async fn on_event(&self, event: &Event) {
        let (severity, msg) = classify(event.kind);
        let run = event.task.as_deref().unwrap_or("-");
        let reason = event.reason.as_deref().unwrap_or("-");
        let attempt = event.attempt.unwrap_or(0);
        let timeout_ms = event.timeout_ms.unwrap_or(0);

        match severity {
            Severity::Trace => trace!(run, attempt, reason, "{msg}"),
            Severity::Debug => debug!(run, attempt, reason, "{msg}"),
            Severity::Info => info!(run, attempt, "{msg}"),
            Severity::Warn => warn!(run, attempt, reason, timeout_ms, "{msg}"),
            Severity::Error => error!(run, attempt, reason, "{msg}"),
        }
    }

    fn name(&self) -> &'static str {
        "skill-event-log"
    }

    fn queue_capacity(&self) -> usize {
        QUEUE_CAPACITY
    }
}

fn classify(kind: EventKind) -> (Severity, &'static str) {
    match kind {
        EventKind::TaskAddRequested => (Severity::Trace, "skill run requested"),
        EventKind::TaskAdded => (Severity::Debug, "skill run registered"),
        EventKind::TaskRemoveRequested => (Severity::Trace, "skill run removal requested"),
        EventKind::TaskRemoved => (Severity::Trace, "skill run removed"),

        EventKind::TaskStarting => (Severity::Info, "skill run starting"),
        EventKind::TaskStopped => (Severity::Debug, "skill run ended with success"),
        EventKind::TaskFailed => (Severity::Warn, "skill run ended with error token"),
        EventKind::TimeoutHit => (Severity::Warn, "skill run abandoned: timeout"),
        EventKind::BackoffScheduled => (Severity::Debug, "skill run rescheduled"),
        EventKind::ActorExhausted => (Severity::Debug, "skill run will not be repeated"),
        EventKind::ActorDead => (Severity::Error, "skill run ended fatally"),

        EventKind::ControllerSubmitted => (Severity::Trace, "skill run submitted to slot"),
        EventKind::ControllerRejected => (Severity::Warn, "skill run rejected: slot busy"),
        EventKind::ControllerSlotTransition => (Severity::Debug, "slot state changed"),

        EventKind::ShutdownRequested => (Severity::Info, "shutdown requested"),
        EventKind::AllStoppedWithinGrace => (Severity::Info, "all skill runs stopped"),
        EventKind::GraceExceeded => (Severity::Warn, "some skill runs did not stop in time"),

        EventKind::SubscriberOverflow => (Severity::Error, "event dropped for a subscriber"),
        EventKind::SubscriberPanicked => (Severity::Error, "subscriber panicked"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_outcomes_have_distinct_severity() {
        assert_eq!(classify(EventKind::TaskStopped).0, Severity::Debug);
        assert_eq!(classify(EventKind::TaskFailed).0, Severity::Warn);
        assert_eq!(classify(EventKind::ActorDead).0, Severity::Error);
    }

    #[test]
    fn busy_slot_and_timeout_are_warnings() {
        assert_eq!(classify(EventKind::ControllerRejected).0, Severity::Warn);
        assert_eq!(classify(EventKind::TimeoutHit).0, Severity::Warn);
    }

    #[test]
    fn subscriber_identity() {
        let log = SkillEventLog::new();
        assert_eq!(log.name(), "skill-event-log");
        assert_eq!(log.queue_capacity(), QUEUE_CAPACITY);
    }
}
