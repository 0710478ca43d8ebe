use std::{fmt, sync::Arc, time::Duration};

use tokio::time::Instant;
use tracing::{debug, error, info};

use skein_core::{Clock, IntentSource, MemoryError, MemorySlot, Skill, SkillError};
use skein_model::{ExitToken, FailureKind, LanguageTag, Step, Understanding};

use crate::dialog::{IntentMatch, WAIT_FOR_INTENT, WaitForIntentConfig};

/// Delay between two looks at the intent source.
const POLL: Duration = Duration::from_millis(50);

/// Waits until a configured intent (or anything, see [`IntentMatch::Any`]) is understood.
///
/// Exit tokens:
/// - `success`: something was understood (`any`);
/// - `success.<intent>`: the listed intent was understood;
/// - `error.timeout`: the timeout elapsed first.
pub struct WaitForIntent {
    matcher: IntentMatch,
    timeout: Option<Duration>,
    source: Box<dyn IntentSource>,
    clock: Arc<dyn Clock>,
    understood: MemorySlot<Understanding>,
    language: Option<MemorySlot<LanguageTag>>,
    deadline: Option<Instant>,
    listening: bool,
    finished: Option<Step>,
}

impl WaitForIntent {
    pub fn new(
        config: WaitForIntentConfig,
        source: Box<dyn IntentSource>,
        clock: Arc<dyn Clock>,
        understood: MemorySlot<Understanding>,
        language: Option<MemorySlot<LanguageTag>>,
    ) -> Self {
        Self {
            matcher: config.matcher,
            timeout: config.timeout,
            source,
            clock,
            understood,
            language,
            deadline: None,
            listening: false,
            finished: None,
        }
    }

    /// Store the understanding (and its language when enabled).
    fn remember(&self, u: &Understanding) -> Result<(), MemoryError> {
        self.understood.memorize(u)?;
        if let Some(slot) = &self.language {
            slot.memorize(&u.language())?;
        }
        Ok(())
    }

    /// Pick the understanding that ends the wait and the token it ends with.
    fn select<'a>(&self, batch: &'a [Understanding]) -> Option<(&'a Understanding, ExitToken)> {
        match &self.matcher {
            IntentMatch::Any => batch.first().map(|u| (u, ExitToken::success())),
            IntentMatch::Intents(intents) => intents.iter().find_map(|intent| {
                batch
                    .iter()
                    .find(|u| &u.intent == intent)
                    .map(|u| (u, ExitToken::success().with_suffix(intent.as_str())))
            }),
        }
    }

    fn finish(&mut self, step: Step) -> Step {
        self.finished = Some(step.clone());
        step
    }
}

impl Skill for WaitForIntent {
    fn name(&self) -> &'static str {
        WAIT_FOR_INTENT
    }

    fn activate(&mut self) -> Result<(), SkillError> {
        if let Some(timeout) = self.timeout {
            debug!(timeout_ms = timeout.as_millis() as u64, "using timeout");
            self.deadline = Some(self.clock.now() + timeout);
        }
        self.source
            .start_listening()
            .map_err(|e| SkillError::Defect {
                skill: WAIT_FOR_INTENT,
                reason: e.to_string(),
            })?;
        self.listening = true;
        Ok(())
    }

    fn step(&mut self) -> Step {
        if let Some(step) = &self.finished {
            return step.clone();
        }
        if !self.listening {
            return Step::Failed(FailureKind::LogicFault);
        }

        let batch = self.source.drain();
        if batch.is_empty() {
            if let Some(deadline) = self.deadline {
                if self.clock.now() > deadline {
                    info!("timeout reached");
                    return self.finish(Step::Done(ExitToken::error().with_suffix("timeout")));
                }
            }
            return Step::Continue(POLL);
        }
        debug!(count = batch.len(), "have new understanding");

        let Some((u, token)) = self.select(&batch) else {
            return Step::Continue(POLL);
        };
        match self.remember(u) {
            Ok(()) => {
                info!(intent = %u.intent, text = %u.text, "understood");
                self.finish(Step::Done(token))
            }
            Err(e) => {
                error!(intent = %u.intent, error = %e, "cannot write understanding to memory");
                self.finish(Step::Failed(FailureKind::Communication))
            }
        }
    }

    fn finalize(&mut self, token: ExitToken) -> Result<ExitToken, SkillError> {
        if self.listening {
            self.source.stop_listening();
            self.listening = false;
        }
        Ok(token)
    }
}

impl fmt::Debug for WaitForIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitForIntent")
            .field("matcher", &self.matcher)
            .field("timeout", &self.timeout)
            .field("slot", &self.understood.key())
            .field("listening", &self.listening)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use skein_core::{InMemoryStore, IntentFeed, IntentHub, ManualClock, MemoryStore};
    use skein_model::Options;

    use crate::{dialog::LANGUAGE_SLOT, testkit::UnreachableStore};

    struct Rig {
        hub: IntentHub,
        clock: ManualClock,
        store: Arc<dyn MemoryStore>,
    }

    impl Rig {
        fn new() -> Self {
            Self::with_store(Arc::new(InMemoryStore::new()))
        }

        fn with_store(store: Arc<dyn MemoryStore>) -> Self {
            Self {
                hub: IntentHub::new(16),
                clock: ManualClock::new(),
                store,
            }
        }

        fn skill(&self, options: Options) -> WaitForIntent {
            let cfg = WaitForIntentConfig::from_options(&options).unwrap();
            let language = cfg
                .set_language
                .then(|| MemorySlot::new(self.store.clone(), LANGUAGE_SLOT));
            let understood = MemorySlot::new(self.store.clone(), cfg.slot.clone());
            WaitForIntent::new(
                cfg,
                self.hub.open(),
                Arc::new(self.clock.clone()),
                understood,
                language,
            )
        }

        fn recall_understanding(&self) -> Option<Understanding> {
            MemorySlot::<Understanding>::new(self.store.clone(), "NLUSlot")
                .recall()
                .unwrap()
        }
    }

    #[test]
    fn keeps_waiting_until_something_arrives() {
        let rig = Rig::new();
        let mut skill = rig.skill(Options::new().with("any", "true"));
        skill.activate().unwrap();

        assert_eq!(skill.step(), Step::Continue(POLL));
        rig.clock.advance(Duration::from_secs(60));
        assert_eq!(skill.step(), Step::Continue(POLL));
    }

    #[test]
    fn any_takes_first_understanding() {
        let rig = Rig::new();
        let mut skill = rig.skill(Options::new().with("any", "true"));
        skill.activate().unwrap();

        rig.hub.publish(Understanding::new("hello", "greet", "en"));
        rig.hub.publish(Understanding::new("bye", "farewell", "en"));

        assert_eq!(skill.step(), Step::Done(ExitToken::success()));
        assert_eq!(
            rig.recall_understanding(),
            Some(Understanding::new("hello", "greet", "en"))
        );
    }

    #[test]
    fn configured_intent_order_wins_over_arrival_order() {
        let rig = Rig::new();
        let mut skill = rig.skill(Options::new().with("intents", "confirm;deny"));
        skill.activate().unwrap();

        rig.hub.publish(Understanding::new("no", "deny", "en"));
        rig.hub.publish(Understanding::new("yes", "confirm", "en"));

        assert_eq!(
            skill.step(),
            Step::Done(ExitToken::success().with_suffix("confirm"))
        );
        assert_eq!(rig.recall_understanding().map(|u| u.intent), Some("confirm".into()));
    }

    #[test]
    fn unlisted_intents_are_discarded() {
        let rig = Rig::new();
        let mut skill = rig.skill(Options::new().with("intents", "confirm"));
        skill.activate().unwrap();

        rig.hub.publish(Understanding::new("what time is it", "time", "en"));
        assert_eq!(skill.step(), Step::Continue(POLL));
        assert_eq!(skill.step(), Step::Continue(POLL));
        assert_eq!(rig.recall_understanding(), None);
    }

    #[test]
    fn utterances_before_activate_are_ignored() {
        let rig = Rig::new();
        let mut skill = rig.skill(Options::new().with("any", "true"));

        rig.hub.publish(Understanding::new("too early", "greet", "en"));
        skill.activate().unwrap();
        assert_eq!(skill.step(), Step::Continue(POLL));
    }

    #[test]
    fn timeout_ends_with_error_token_and_sticks() {
        let rig = Rig::new();
        let mut skill = rig.skill(
            Options::new()
                .with("intents", "confirm")
                .with("timeout-ms", "1000"),
        );
        skill.activate().unwrap();

        rig.clock.advance(Duration::from_millis(1_000));
        assert_eq!(skill.step(), Step::Continue(POLL));

        rig.clock.advance(Duration::from_millis(1));
        let timeout = Step::Done(ExitToken::error().with_suffix("timeout"));
        assert_eq!(skill.step(), timeout);

        // late understanding changes nothing
        rig.hub.publish(Understanding::new("yes", "confirm", "en"));
        assert_eq!(skill.step(), timeout);
    }

    #[test]
    fn language_is_stored_when_enabled() {
        let rig = Rig::new();
        let mut skill = rig.skill(
            Options::new()
                .with("intents", "order")
                .with("set-language", "true"),
        );
        skill.activate().unwrap();

        rig.hub.publish(Understanding::new("ein Kaffee bitte", "order", "de"));
        assert_eq!(
            skill.step(),
            Step::Done(ExitToken::success().with_suffix("order"))
        );

        let lang = MemorySlot::<LanguageTag>::new(rig.store.clone(), LANGUAGE_SLOT)
            .recall()
            .unwrap();
        assert_eq!(lang, Some(LanguageTag("de".into())));
    }

    #[test]
    fn memory_failure_is_a_communication_failure() {
        let rig = Rig::with_store(Arc::new(UnreachableStore));
        let mut skill = rig.skill(Options::new().with("any", "true"));
        skill.activate().unwrap();

        rig.hub.publish(Understanding::new("hello", "greet", "en"));
        assert_eq!(skill.step(), Step::Failed(FailureKind::Communication));
        assert_eq!(skill.step(), Step::Failed(FailureKind::Communication));
    }

    #[test]
    fn finalize_detaches_listener_and_passes_token() {
        let rig = Rig::new();
        let mut skill = rig.skill(Options::new().with("any", "true"));
        skill.activate().unwrap();
        assert_eq!(rig.hub.listeners(), 1);

        let token = ExitToken::success();
        assert_eq!(skill.finalize(token.clone()).unwrap(), token);
        assert_eq!(rig.hub.listeners(), 0);
    }

    #[test]
    fn step_before_activate_is_a_logic_fault() {
        let rig = Rig::new();
        let mut skill = rig.skill(Options::new().with("any", "true"));
        assert_eq!(skill.step(), Step::Failed(FailureKind::LogicFault));
    }
}
