use axum::{routing::get, Router};
use ::metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use std::time::Duration;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder (once per process).
    pub fn init() -> anyhow::Result<Self> {
        // Use default buckets to avoid API differences across crate versions.
        let handle = PrometheusBuilder::new().install_recorder()?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "sentiment_analyze_total",
            "Successful analyses, labelled by scoring strategy."
        );
        describe_counter!(
            "sentiment_invalid_input_total",
            "Requests rejected because the text was empty."
        );
        describe_counter!(
            "sentiment_analysis_failures_total",
            "Default analyzer failures."
        );
        describe_histogram!("sentiment_analyze_ms", "Analysis time in milliseconds.");
    });
}

pub(crate) fn record_analysis(strategy: &'static str, took: Duration) {
    counter!("sentiment_analyze_total", "strategy" => strategy).increment(1);
    histogram!("sentiment_analyze_ms").record(took.as_secs_f64() * 1000.0);
}

pub(crate) fn record_invalid_input() {
    counter!("sentiment_invalid_input_total").increment(1);
}

pub(crate) fn record_analysis_failure() {
    counter!("sentiment_analysis_failures_total").increment(1);
}
