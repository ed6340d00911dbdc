// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod config;
pub mod error;
pub mod language;
pub mod lexicon;
pub mod metrics;
pub mod normalize;
pub mod sentiment;

// Scoring pipeline (strategies, lexicon scorer, default adapter, composer)
pub mod analyze;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{AnalysisRequest, AnalysisResult, SentimentCategory, SentimentEngine};
pub use crate::api::router;
pub use crate::error::AnalyzeError;

use std::sync::Arc;
use tracing::{info, warn};

/// Build the full application router from the resolved configuration.
///
/// Mounts `/metrics` when `METRICS_ROUTE=1`. The Prometheus recorder is
/// process-global, so only the first call installs it; later calls skip the
/// route with a log line.
pub fn app() -> anyhow::Result<axum::Router> {
    let cfg = config::LanguageConfig::load()?;
    let engine = Arc::new(SentimentEngine::from_config(cfg)?);
    info!(
        languages = engine.languages().len(),
        custom_lexicons = engine.resolver().lexicons().len(),
        "sentiment engine ready"
    );

    let mut router = api::router(engine);
    if config::metrics_route_enabled() {
        match crate::metrics::Metrics::init() {
            Ok(m) => router = router.merge(m.router()),
            Err(e) => warn!(error = %e, "metrics recorder not installed; /metrics disabled"),
        }
    }
    Ok(router)
}
