mod config;

use std::{env, path::PathBuf, sync::Arc, time::Duration};

use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

use skein_core::{BuildContext, IntentHub, SkillRegistry, SupervisorApi};
use skein_observe::{SkillEventLog, init_logger};
use skein_prometheus::PrometheusMetrics;
use skein_skills::register_builtin_skills;
use taskvisor::{SupervisorConfig, ControllerConfig, Subscribe};

use crate::config::AgentConfig;

const REPORT_POLL: Duration = Duration::from_millis(250);

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) config + logger
    let cfg = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => AgentConfig::load(&path)?,
        None => AgentConfig::default(),
    };
    init_logger(&cfg.logger)?;
    info!(skills = cfg.skills.len(), "logger initialized");

    // 2) collaborators
    let metrics = PrometheusMetrics::new()?;
    let hub = Arc::new(IntentHub::default());
    let ctx = BuildContext::default()
        .with_metrics(Arc::new(metrics.clone()))
        .with_intents(hub.clone());

    // 3) registry + providers
    let mut registry = SkillRegistry::new().with_context(ctx);
    register_builtin_skills(&mut registry);

    // 4) supervisor
    let subscribers: Vec<Arc<dyn Subscribe>> = vec![Arc::new(SkillEventLog::new())];
    let api = SupervisorApi::new(
        SupervisorConfig::default(),
        ControllerConfig::default(),
        subscribers,
        registry,
    )
    .await?;

    // 5) submit
    let mut runs = Vec::with_capacity(cfg.skills.len());
    for spec in &cfg.skills {
        let run_id = api.submit(spec).await?;
        info!(task = %run_id, skill = %spec.skill, "skill submitted");
        runs.push(run_id);
    }

    // 6) simulated speech pipeline
    let utterances = cfg.utterances.clone();
    let delay = cfg.utter_after();
    let feed = hub.clone();
    tokio::spawn(async move {
        sleep(delay).await;
        for u in utterances {
            let heard_by = feed.publish(u);
            debug!(heard_by, "utterance published");
        }
    });

    // 7) wait for the result channel
    let deadline = Instant::now() + cfg.wait();
    let reports = api.reports();
    while runs.iter().any(|id| reports.get(id).is_none()) && Instant::now() < deadline {
        sleep(REPORT_POLL).await;
    }

    for id in &runs {
        match reports.get(id) {
            Some(token) => info!(task = %id, token = %token, "skill report"),
            None => warn!(task = %id, "no report before deadline"),
        }
    }
    debug!(metrics = %metrics.encode_text()?, "final metrics");
    Ok(())
}
