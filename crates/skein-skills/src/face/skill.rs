use std::{fmt, sync::Arc};

use tracing::{debug, info};

use skein_core::{Clock, Countdown, Delivery, Skill, SkillError, Speaker};
use skein_model::{ExitToken, Step};

use crate::face::{LEARN_FACE, LearnFaceConfig};

const PROMPT_LOOK: &str = "Please look into my upper camera ";
const PROMPT_LEARNING: &str = "I am learning your face now.";
const PROMPT_THANKS: &str = "Thank you!";

/// Timed face learning interaction.
///
/// The opening prompt is waited for, so the countdown only starts once the
/// person was actually asked to look into the camera.
pub struct LearnFace {
    speaker: Speaker,
    clock: Arc<dyn Clock>,
    countdown: Countdown,
}

impl LearnFace {
    pub fn new(
        config: LearnFaceConfig,
        speaker: Speaker,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, SkillError> {
        Ok(Self {
            speaker,
            clock,
            countdown: Countdown::new(config.learn, config.poll)?,
        })
    }
}

impl Skill for LearnFace {
    fn name(&self) -> &'static str {
        LEARN_FACE
    }

    fn activate(&mut self) -> Result<(), SkillError> {
        self.speaker.say(PROMPT_LOOK, Delivery::WaitForCompletion)?;
        self.countdown.start(self.clock.now());
        debug!(
            threshold_ms = self.countdown.threshold().as_millis() as u64,
            "face learning started"
        );
        self.speaker.say(PROMPT_LEARNING, Delivery::FireAndForget)
    }

    fn step(&mut self) -> Step {
        let was_finished = self.countdown.is_finished();
        let step = self.countdown.poll(self.clock.now());
        if !was_finished && step.is_terminal() {
            info!(
                elapsed_ms = self.countdown.observed().as_millis() as u64,
                "face learning interval elapsed"
            );
        }
        step
    }

    fn finalize(&mut self, token: ExitToken) -> Result<ExitToken, SkillError> {
        self.speaker.say(PROMPT_THANKS, Delivery::FireAndForget)?;
        Ok(token)
    }
}

impl fmt::Debug for LearnFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LearnFace")
            .field("countdown", &self.countdown)
            .finish()
    }
}
