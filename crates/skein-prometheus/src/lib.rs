//! Prometheus metrics backend for skill runs.
//!
//! [`PrometheusMetrics`] implements [`skein_core::MetricsBackend`]; inject it
//! through [`skein_core::BuildContext::with_metrics`].
//!
//! ```rust
//! use std::sync::Arc;
//! use skein_core::BuildContext;
//! use skein_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let ctx = BuildContext::default().with_metrics(Arc::new(metrics.clone()));
//! # let _ = ctx;
//! print!("{}", metrics.encode_text()?);
//! # Ok(())
//! # }
//! ```
//!
//! Metrics:
//! - `skein_skills_started_total{skill}`
//! - `skein_skills_completed_total{skill, outcome}`
//! - `skein_skill_duration_seconds{skill}`
//! - `skein_notify_errors_total{skill, error_kind}`
mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
