// src/analyze/mod.rs
//! Analysis pipeline entry.
//!
//! Order per request:
//! 1) normalize text (rejects empty input)
//! 2) resolve language -> display name + strategy
//! 3) score (custom lexicon or default analyzer)
//! 4) compose the result

pub mod compose;
pub mod default_adapter;
pub mod lexicon_scorer;
pub mod strategy;

use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::config::LanguageConfig;
use crate::error::AnalyzeError;
use crate::language::{LanguageEntry, LanguageResolver};
use crate::metrics;
use crate::normalize::normalize;
use crate::sentiment::AfinnAnalyzer;

// Re-export convenient types.
pub use compose::{compose, AnalysisResult, SentimentCategory};
pub use default_adapter::{DynPolarityAnalyzer, PolarityAnalyzer, PolarityReport};
pub use strategy::{scorer_for, CustomLexiconStrategy, DefaultAnalyzerStrategy, ScoringStrategy};

/// One analysis request. `language` defaults to the baseline code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            text: text.into(),
            language: language.map(str::to_string),
        }
    }
}

/// Immutable engine shared across requests (wrap in `Arc`).
pub struct SentimentEngine {
    resolver: LanguageResolver,
    default_analyzer: DynPolarityAnalyzer,
}

impl SentimentEngine {
    pub fn new(resolver: LanguageResolver, default_analyzer: DynPolarityAnalyzer) -> Self {
        Self {
            resolver,
            default_analyzer,
        }
    }

    /// Engine with the AFINN-style default analyzer.
    pub fn from_config(config: LanguageConfig) -> anyhow::Result<Self> {
        let afinn = AfinnAnalyzer::builtin()?;
        Ok(Self::new(config.into_resolver(), Arc::new(afinn)))
    }

    /// Engine over the configuration compiled into the binary.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_config(LanguageConfig::builtin()?)
    }

    /// Analyze one request. Errors never carry partial results.
    pub fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, AnalyzeError> {
        let started = Instant::now();

        let normalized = match normalize(&req.text) {
            Ok(n) => n,
            Err(e) => {
                metrics::record_invalid_input();
                return Err(e);
            }
        };

        // Codes match verbatim; only an absent or empty code means baseline.
        let code = req
            .language
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.resolver.baseline_code());
        let resolution = self.resolver.resolve(code);

        let scorer = strategy::scorer_for(resolution.strategy, self.default_analyzer.as_ref());
        let outcome = match scorer.score(&normalized) {
            Ok(o) => o,
            Err(e) => {
                metrics::record_analysis_failure();
                return Err(e);
            }
        };

        let label = resolution.strategy.label();
        let result = compose(code, normalized, resolution.display_name, outcome);

        // Never log raw text: hashed id only.
        debug!(
            id = %anon_hash(&result.normalized_text),
            language = code,
            strategy = label,
            score = result.score,
            words = result.word_count,
            "analyzed"
        );
        metrics::record_analysis(label, started.elapsed());

        Ok(result)
    }

    /// Supported languages in table order.
    pub fn languages(&self) -> &[LanguageEntry] {
        self.resolver.languages()
    }

    pub fn resolver(&self) -> &LanguageResolver {
        &self.resolver
    }
}

/// Short, anonymized id for log correlation (first 6 bytes of SHA-256).
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
