use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use skein_model::{SkillSpec, Understanding};
use skein_observe::LoggerConfig;

/// Daemon configuration, read from a JSON file.
///
/// Without a file the daemon runs a short face-enrolment plus dialog session
/// with one simulated utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentConfig {
    pub logger: LoggerConfig,
    /// Skills submitted at startup, in order.
    pub skills: Vec<SkillSpec>,
    /// Utterances published on the intent feed after `utter_after_ms`.
    pub utterances: Vec<Understanding>,
    pub utter_after_ms: u64,
    /// Upper bound on how long the daemon waits for all reports.
    pub wait_ms: u64,
}

impl AgentConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn utter_after(&self) -> Duration {
        Duration::from_millis(self.utter_after_ms)
    }

    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            logger: LoggerConfig::default(),
            skills: vec![
                SkillSpec::new("learn-face", "face").with_timeout_ms(20_000),
                SkillSpec::new("wait-for-intent", "dialog")
                    .with_option("intents", "confirm;deny")
                    .with_option("timeout-ms", "5000")
                    .with_option("set-language", "true"),
            ],
            utterances: vec![Understanding::new("yes, go ahead", "confirm", "en")],
            utter_after_ms: 1_000,
            wait_ms: 15_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_has_both_skills() {
        let cfg = AgentConfig::default();
        let names: Vec<_> = cfg.skills.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, vec!["learn-face", "wait-for-intent"]);
        assert_eq!(cfg.wait(), Duration::from_secs(15));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: AgentConfig = serde_json::from_str(
            r#"{
                "logger": {"format": "json"},
                "skills": [{"skill": "learn-face", "slot": "face", "options": {"learn-ms": "2000"}}],
                "waitMs": 4000
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.skills.len(), 1);
        assert_eq!(cfg.skills[0].options.get("learn-ms"), Some("2000"));
        assert_eq!(cfg.wait_ms, 4_000);
        assert_eq!(cfg.utter_after_ms, 1_000);
        assert_eq!(cfg.utterances.len(), 1);
    }
}
