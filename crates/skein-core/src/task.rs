//! Adapter that turns a skill run into a taskvisor task.
//!
//! The terminal token of every finished run is published in [`SkillReports`],
//! keyed by run id; that map is the result channel callers read from.
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, RwLock},
};

use taskvisor::{TaskError, TaskFn, TaskRef};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use skein_model::{ExitStatus, ExitToken, SkillSpec};

use crate::{
    driver::{RunError, run_skill},
    metrics::SkillOutcome,
    provider::{BuildContext, SkillProvider},
    skill::Skill,
};

/// Shared run-id to terminal-token map.
#[derive(Debug, Clone, Default)]
pub struct SkillReports {
    inner: Arc<RwLock<HashMap<String, ExitToken>>>,
}

impl SkillReports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the terminal token of a run, replacing an earlier one.
    pub fn record(&self, run_id: &str, token: ExitToken) {
        match self.inner.write() {
            Ok(mut map) => {
                map.insert(run_id.to_string(), token);
            }
            Err(_) => warn!(run_id, "skill reports lock poisoned; dropping token"),
        }
    }

    pub fn get(&self, run_id: &str) -> Option<ExitToken> {
        self.inner.read().ok()?.get(run_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of all reports, sorted by run id.
    pub fn snapshot(&self) -> Vec<(String, ExitToken)> {
        let mut out: Vec<_> = match self.inner.read() {
            Ok(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            Err(_) => Vec::new(),
        };
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }
}

/// Build a [`TaskRef`] that runs one skill to completion.
///
/// `seed` is used for the first attempt when present (usually the instance
/// built while validating the spec); every further attempt builds a fresh skill.
///
/// Outcome mapping:
/// - `success` token: `Ok(())`
/// - `error` token: `TaskError::Fail`
/// - `fatal` token or defect: `TaskError::Fatal`
/// - cancellation: `TaskError::Canceled`, nothing recorded
pub fn skill_task(
    run_id: String,
    provider: Arc<dyn SkillProvider>,
    spec: SkillSpec,
    ctx: BuildContext,
    reports: SkillReports,
    seed: Option<Box<dyn Skill>>,
) -> TaskRef {
    let seed = Arc::new(Mutex::new(seed));

    TaskFn::arc(run_id.clone(), move |cancel: CancellationToken| {
        let attempt = Attempt {
            run_id: run_id.clone(),
            provider: Arc::clone(&provider),
            spec: spec.clone(),
            ctx: ctx.clone(),
            reports: reports.clone(),
        };
        let seeded = seed.lock().ok().and_then(|mut s| s.take());

        async move { attempt.run(seeded, cancel).await }
    })
}

/// Everything one task attempt needs, cloned out of the task closure.
struct Attempt {
    run_id: String,
    provider: Arc<dyn SkillProvider>,
    spec: SkillSpec,
    ctx: BuildContext,
    reports: SkillReports,
}

impl Attempt {
    async fn run(
        self,
        seeded: Option<Box<dyn Skill>>,
        cancel: CancellationToken,
    ) -> Result<(), TaskError> {
        let mut skill = match seeded {
            Some(skill) => skill,
            None => self
                .provider
                .build(&self.spec, &self.ctx)
                .map_err(|e| TaskError::Fatal {
                    reason: format!("skill build failed: {e}"),
                })?,
        };

        let name = skill.name();
        let metrics = self.ctx.metrics();
        let started = self.ctx.clock().now();
        metrics.record_skill_started(name);

        let res = run_skill(skill.as_mut(), &cancel).await;
        let duration_ms = self
            .ctx
            .clock()
            .now()
            .saturating_duration_since(started)
            .as_millis() as u64;

        match res {
            Ok(summary) => {
                let token = summary.token;
                metrics.record_skill_completed(name, SkillOutcome::from_token(&token), duration_ms);
                self.reports.record(&self.run_id, token.clone());
                info!(task = %self.run_id, skill = name, token = %token, duration_ms, "skill finished");

                match token.status() {
                    ExitStatus::Success => Ok(()),
                    ExitStatus::Error => Err(TaskError::Fail {
                        reason: format!("skill ended with {token}"),
                    }),
                    ExitStatus::Fatal => Err(TaskError::Fatal {
                        reason: format!("skill ended with {token}"),
                    }),
                }
            }
            Err(RunError::Canceled) => {
                debug!(task = %self.run_id, skill = name, "skill run canceled");
                metrics.record_skill_completed(name, SkillOutcome::Canceled, duration_ms);
                Err(TaskError::Canceled)
            }
            Err(RunError::Defect(e)) => {
                warn!(task = %self.run_id, skill = name, error = %e, "skill defect");
                metrics.record_skill_completed(name, SkillOutcome::Fatal, duration_ms);
                self.reports.record(&self.run_id, ExitToken::fatal());
                Err(TaskError::Fatal {
                    reason: e.to_string(),
                })
            }
        }
    }
}
