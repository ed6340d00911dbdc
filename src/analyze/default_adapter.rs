//! Boundary to the general-purpose polarity analyzer.
//!
//! The analyzer itself is opaque; this adapter only reshapes its report into
//! the pipeline's outcome type and turns its errors into
//! [`AnalyzeError::AnalysisFailure`].

use std::sync::Arc;
use tracing::warn;

use crate::error::AnalyzeError;

/// What a polarity analyzer reports. Word lists are optional because not
/// every analyzer exposes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolarityReport {
    pub score: i32,
    pub comparative: f64,
    pub positive: Option<Vec<String>>,
    pub negative: Option<Vec<String>>,
}

/// Trait object used for languages without a custom lexicon.
pub trait PolarityAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> anyhow::Result<PolarityReport>;
    /// Analyzer name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Convenient alias used by the engine and tests.
pub type DynPolarityAnalyzer = Arc<dyn PolarityAnalyzer>;

/// Normalized default-path outcome: word lists always present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultScore {
    pub score: i32,
    pub comparative: f64,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Run `analyzer` and normalize its report.
pub fn analyze_default(
    analyzer: &dyn PolarityAnalyzer,
    normalized: &str,
) -> Result<DefaultScore, AnalyzeError> {
    let report = analyzer.analyze(normalized).map_err(|e| {
        warn!(analyzer = analyzer.name(), error = %e, "default analyzer failed");
        AnalyzeError::AnalysisFailure(format!("{e:#}"))
    })?;

    Ok(DefaultScore {
        score: report.score,
        comparative: report.comparative,
        positive: report.positive.unwrap_or_default(),
        negative: report.negative.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;
    impl PolarityAnalyzer for Bare {
        fn analyze(&self, _text: &str) -> anyhow::Result<PolarityReport> {
            Ok(PolarityReport {
                score: -4,
                comparative: -0.25,
                positive: None,
                negative: None,
            })
        }
        fn name(&self) -> &'static str {
            "bare"
        }
    }

    struct Broken;
    impl PolarityAnalyzer for Broken {
        fn analyze(&self, _text: &str) -> anyhow::Result<PolarityReport> {
            anyhow::bail!("lexicon unavailable")
        }
        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn missing_word_lists_default_to_empty() {
        let out = analyze_default(&Bare, "whatever").unwrap();
        assert_eq!(out.score, -4);
        assert_eq!(out.comparative, -0.25);
        assert!(out.positive.is_empty());
        assert!(out.negative.is_empty());
    }

    #[test]
    fn collaborator_error_becomes_analysis_failure() {
        let err = analyze_default(&Broken, "whatever").unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::AnalysisFailure("lexicon unavailable".to_string())
        );
    }
}
