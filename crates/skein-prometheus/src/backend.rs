use std::sync::Arc;

use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
    proto::MetricFamily,
};

use skein_core::{MetricsBackend, SkillOutcome};

const NAMESPACE: &str = "skein";

/// Interaction-scale buckets: a face enrolment is ~8s, dialog waits can run for minutes.
const DURATION_BUCKETS: &[f64] = &[0.05, 0.5, 1.0, 2.0, 5.0, 8.0, 10.0, 15.0, 30.0, 60.0, 120.0];

/// Prometheus metrics backend.
///
/// Label values are bounded: `skill` is a provider name, `outcome` one of
/// `success|error|fatal|canceled`, `error_kind` one of `io|execution|interrupted`.
#[derive(Clone)]
pub struct PrometheusMetrics {
    started: CounterVec,
    completed: CounterVec,
    duration: HistogramVec,
    notify_errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Register all skill metrics in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let started = CounterVec::new(
            Opts::new("skills_started_total", "Skill runs activated").namespace(NAMESPACE),
            &["skill"],
        )?;
        registry.register(Box::new(started.clone()))?;

        let completed = CounterVec::new(
            Opts::new("skills_completed_total", "Skill runs finished, by outcome")
                .namespace(NAMESPACE),
            &["skill", "outcome"],
        )?;
        registry.register(Box::new(completed.clone()))?;

        let duration = HistogramVec::new(
            HistogramOpts::new("skill_duration_seconds", "Skill run wall time in seconds")
                .namespace(NAMESPACE)
                .buckets(DURATION_BUCKETS.to_vec()),
            &["skill"],
        )?;
        registry.register(Box::new(duration.clone()))?;

        let notify_errors = CounterVec::new(
            Opts::new("notify_errors_total", "Notifier failures seen by skills")
                .namespace(NAMESPACE),
            &["skill", "error_kind"],
        )?;
        registry.register(Box::new(notify_errors.clone()))?;

        Ok(Self {
            started,
            completed,
            duration,
            notify_errors,
            registry,
        })
    }

    /// Backend with a private registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Render all metrics in the text exposition format.
    pub fn encode_text(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_skill_started(&self, skill: &str) {
        self.started.with_label_values(&[skill]).inc();
    }

    fn record_skill_completed(&self, skill: &str, outcome: SkillOutcome, duration_ms: u64) {
        self.completed
            .with_label_values(&[skill, outcome.as_label()])
            .inc();
        self.duration
            .with_label_values(&[skill])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_notify_error(&self, skill: &str, error_kind: &str) {
        self.notify_errors
            .with_label_values(&[skill, error_kind])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family<'a>(families: &'a [MetricFamily], name: &str) -> &'a MetricFamily {
        families
            .iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("metric {name} not found"))
    }

    #[test]
    fn started_counter_is_labelled_by_skill() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_skill_started("learn-face");
        metrics.record_skill_started("learn-face");
        metrics.record_skill_started("wait-for-intent");

        let families = metrics.gather();
        assert_eq!(
            family(&families, "skein_skills_started_total").get_metric().len(),
            2
        );
    }

    #[test]
    fn completion_feeds_counter_and_histogram() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_skill_completed("learn-face", SkillOutcome::Success, 8_000);
        metrics.record_skill_completed("learn-face", SkillOutcome::Canceled, 1_200);

        let families = metrics.gather();
        assert_eq!(
            family(&families, "skein_skills_completed_total").get_metric().len(),
            2
        );

        assert_eq!(
            family(&families, "skein_skill_duration_seconds").get_metric().len(),
            1
        );
        let text = metrics.encode_text().unwrap();
        assert!(text.contains(r#"skein_skill_duration_seconds_count{skill="learn-face"} 2"#));
    }

    #[test]
    fn notify_errors_are_counted() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_notify_error("learn-face", "io");

        let text = metrics.encode_text().unwrap();
        assert!(text.contains("skein_notify_errors_total"));
        assert!(text.contains(r#"error_kind="io""#));
    }

    #[test]
    fn registering_twice_in_one_registry_fails() {
        let registry = Arc::new(Registry::new());
        assert!(PrometheusMetrics::new_with_registry(registry.clone()).is_ok());
        assert!(PrometheusMetrics::new_with_registry(registry).is_err());
    }
}
