//! Single-threshold timer shared by timed skills.
//!
//! Two states: waiting (elapsed < threshold) and finished. The finished state
//! is sticky, so a caller that keeps stepping after `Done` keeps seeing the
//! same `Done`.
use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

use skein_model::{ExitToken, FailureKind, ModelError, Step};

/// Elapsed-time guard that reports `Continue(poll)` until `threshold` has passed.
#[derive(Debug, Clone)]
pub struct Countdown {
    threshold: Duration,
    poll: Duration,
    started: Option<Instant>,
    observed: Duration,
    finished: Option<ExitToken>,
}

impl Countdown {
    /// Build a countdown. `poll` must be non-zero.
    pub fn new(threshold: Duration, poll: Duration) -> Result<Self, ModelError> {
        if poll.is_zero() {
            return Err(ModelError::Invalid("poll interval must be > 0".into()));
        }
        Ok(Self {
            threshold,
            poll,
            started: None,
            observed: Duration::ZERO,
            finished: None,
        })
    }

    /// Convenience constructor taking milliseconds.
    pub fn from_millis(threshold_ms: u64, poll_ms: u64) -> Result<Self, ModelError> {
        Self::new(
            Duration::from_millis(threshold_ms),
            Duration::from_millis(poll_ms),
        )
    }

    /// Record the activation timestamp.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
        self.observed = Duration::ZERO;
        self.finished = None;
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll
    }

    /// Largest elapsed time observed so far.
    pub fn observed(&self) -> Duration {
        self.observed
    }

    /// Check the timer against `now`.
    pub fn poll(&mut self, now: Instant) -> Step {
        if let Some(token) = &self.finished {
            return Step::Done(token.clone());
        }
        let Some(started) = self.started else {
            return Step::Failed(FailureKind::LogicFault);
        };

        // never let an observation go backwards
        let elapsed = now.saturating_duration_since(started).max(self.observed);
        self.observed = elapsed;

        if elapsed < self.threshold {
            trace!(
                elapsed_ms = elapsed.as_millis() as u64,
                threshold_ms = self.threshold.as_millis() as u64,
                "countdown waiting"
            );
            return Step::Continue(self.poll);
        }

        let token = ExitToken::success();
        self.finished = Some(token.clone());
        Step::Done(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn zero_poll_is_rejected() {
        assert!(Countdown::from_millis(8_000, 0).is_err());
    }

    #[test]
    fn poll_before_start_is_a_logic_fault() {
        let mut c = Countdown::from_millis(1_000, 100).unwrap();
        assert_eq!(
            c.poll(Instant::now()),
            Step::Failed(FailureKind::LogicFault)
        );
    }

    #[test]
    fn learning_interval_scenario() {
        let t0 = Instant::now();
        let mut c = Countdown::from_millis(8_000, 500).unwrap();
        c.start(t0);

        for k in 1..=15u64 {
            assert_eq!(
                c.poll(t0 + ms(500 * k)),
                Step::Continue(ms(500)),
                "call at t={}ms",
                500 * k
            );
        }
        assert_eq!(c.poll(t0 + ms(8_000)), Step::Done(ExitToken::success()));
    }

    #[test]
    fn continue_count_is_ceil_of_threshold_over_poll() {
        let cases = [(0, 500), (1, 500), (499, 500), (500, 500), (501, 500), (8_000, 500), (7, 3)];

        for (threshold, poll) in cases {
            let t0 = Instant::now();
            let mut c = Countdown::from_millis(threshold, poll).unwrap();
            c.start(t0);

            let mut continues = 0u64;
            let mut t = 0u64;
            let done = loop {
                match c.poll(t0 + ms(t)) {
                    Step::Continue(d) => {
                        assert_eq!(d, ms(poll));
                        continues += 1;
                        t += poll;
                    }
                    other => break other,
                }
            };

            assert_eq!(done, Step::Done(ExitToken::success()));
            assert_eq!(continues, threshold.div_ceil(poll), "T={threshold} P={poll}");
        }
    }

    #[test]
    fn done_is_sticky() {
        let t0 = Instant::now();
        let mut c = Countdown::from_millis(100, 50).unwrap();
        c.start(t0);

        assert_eq!(c.poll(t0 + ms(100)), Step::Done(ExitToken::success()));
        // an earlier reading after completion changes nothing
        assert_eq!(c.poll(t0), Step::Done(ExitToken::success()));
        assert_eq!(c.poll(t0 + ms(10_000)), Step::Done(ExitToken::success()));
        assert!(c.is_finished());
    }

    #[test]
    fn observed_elapsed_never_decreases() {
        let t0 = Instant::now();
        let mut c = Countdown::from_millis(1_000, 100).unwrap();
        c.start(t0);

        c.poll(t0 + ms(600));
        assert_eq!(c.observed(), ms(600));

        // a stale reading is clamped to what was already observed
        c.poll(t0 + ms(200));
        assert_eq!(c.observed(), ms(600));

        c.poll(t0 + ms(700));
        assert_eq!(c.observed(), ms(700));
    }

    #[test]
    fn restart_resets_state() {
        let t0 = Instant::now();
        let mut c = Countdown::from_millis(100, 50).unwrap();
        c.start(t0);
        c.poll(t0 + ms(200));
        assert!(c.is_finished());

        let t1 = t0 + ms(300);
        c.start(t1);
        assert!(!c.is_finished());
        assert_eq!(c.poll(t1), Step::Continue(ms(50)));
    }
}
