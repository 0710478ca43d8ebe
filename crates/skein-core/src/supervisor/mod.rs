//! High-level API over the taskvisor `Supervisor`.
//! - Owns a `Supervisor` instance.
//! - Uses `SkillRegistry` to resolve a provider and validate each `SkillSpec`.
//! - Submits skill runs via the controller and hands back the run id.
use std::sync::Arc;

use taskvisor::{SupervisorConfig, ControllerConfig, Subscribe, Supervisor};
use tracing::{debug, error, info, instrument};

use skein_model::SkillSpec;

use crate::{
    error::CoreError,
    map::to_controller_spec,
    provider::make_run_id,
    registry::SkillRegistry,
    task::{SkillReports, skill_task},
};

/// Thin wrapper around taskvisor [`Supervisor`] with a skill registry and a result channel.
pub struct SupervisorApi {
    sup: Arc<Supervisor>,
    registry: SkillRegistry,
    reports: SkillReports,
}

impl SupervisorApi {
    /// Create a supervisor with explicit configs and start its run loop in background.
    pub async fn new(
        sup_cfg: SupervisorConfig,
        ctrl_cfg: ControllerConfig,
        subscribers: Vec<Arc<dyn Subscribe>>,
        registry: SkillRegistry,
    ) -> Result<Self, CoreError> {
        let sup = Supervisor::builder(sup_cfg)
            .with_subscribers(subscribers)
            .with_controller(ctrl_cfg)
            .build();

        let runner = Arc::clone(&sup);
        tokio::spawn(async move {
            if let Err(e) = runner.run(Vec::new()).await {
                error!(error = %e, "supervisor run loop exited with error");
            }
        });
        sup.wait_ready().await;
        info!("supervisor is ready to accept skills");
        Ok(Self {
            sup,
            registry,
            reports: SkillReports::new(),
        })
    }

    /// Get a clone of the underlying supervisor handle.
    pub fn supervisor(&self) -> Arc<Supervisor> {
        Arc::clone(&self.sup)
    }

    pub fn registry(&self) -> &SkillRegistry {
        &self.registry
    }

    /// Result channel with the terminal token of every finished run.
    pub fn reports(&self) -> &SkillReports {
        &self.reports
    }

    /// Validate, build and submit a skill run.
    ///
    /// Steps:
    /// 1. Resolve a provider and build the skill (option errors fail here).
    /// 2. Wrap it into a task named after a fresh run id.
    /// 3. Submit the controller spec; the run id is returned.
    #[instrument(level = "debug", skip(self, spec), fields(skill = %spec.skill, slot = %spec.slot))]
    pub async fn submit(&self, spec: &SkillSpec) -> Result<String, CoreError> {
        let provider = self.registry.resolve(spec)?;
        let ctx = self.registry.context().clone();
        let skill = provider.build(spec, &ctx)?;

        let run_id = make_run_id(provider.name(), &spec.slot);
        let task = skill_task(
            run_id.clone(),
            provider,
            spec.clone(),
            ctx,
            self.reports.clone(),
            Some(skill),
        );

        debug!(task = %run_id, "submitting via controller");
        self.sup
            .submit(to_controller_spec(task, spec))
            .await
            .map_err(|e| CoreError::Supervisor(e.to_string()))?;
        Ok(run_id)
    }
}
