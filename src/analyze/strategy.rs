//! Scoring strategies selected per request by the language resolver.

use crate::analyze::default_adapter::{analyze_default, PolarityAnalyzer};
use crate::analyze::lexicon_scorer;
use crate::error::AnalyzeError;
use crate::language::Strategy;
use crate::lexicon::Lexicon;

/// Output shared by all strategies. `comparative` is `None` when the
/// strategy leaves it to the composer (score / word count).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyOutcome {
    pub score: i32,
    pub comparative: Option<f64>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

pub trait ScoringStrategy {
    fn score(&self, normalized: &str) -> Result<StrategyOutcome, AnalyzeError>;
}

/// Scorer for a resolved strategy. Custom lexicons never touch the default
/// analyzer.
pub fn scorer_for<'a>(
    strategy: Strategy<'a>,
    default_analyzer: &'a dyn PolarityAnalyzer,
) -> Box<dyn ScoringStrategy + 'a> {
    match strategy {
        Strategy::CustomLexicon(lexicon) => Box::new(CustomLexiconStrategy::new(lexicon)),
        Strategy::DefaultAnalyzer => Box::new(DefaultAnalyzerStrategy::new(default_analyzer)),
    }
}

/// Hand-authored lexicon, substring matching.
pub struct CustomLexiconStrategy<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> CustomLexiconStrategy<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }
}

impl ScoringStrategy for CustomLexiconStrategy<'_> {
    fn score(&self, normalized: &str) -> Result<StrategyOutcome, AnalyzeError> {
        let r = lexicon_scorer::score(normalized, self.lexicon);
        Ok(StrategyOutcome {
            score: r.score,
            comparative: None,
            positive: r.positive,
            negative: r.negative,
        })
    }
}

/// General-purpose polarity analyzer behind the adapter.
pub struct DefaultAnalyzerStrategy<'a> {
    analyzer: &'a dyn PolarityAnalyzer,
}

impl<'a> DefaultAnalyzerStrategy<'a> {
    pub fn new(analyzer: &'a dyn PolarityAnalyzer) -> Self {
        Self { analyzer }
    }
}

impl ScoringStrategy for DefaultAnalyzerStrategy<'_> {
    fn score(&self, normalized: &str) -> Result<StrategyOutcome, AnalyzeError> {
        let r = analyze_default(self.analyzer, normalized)?;
        Ok(StrategyOutcome {
            score: r.score,
            comparative: Some(r.comparative),
            positive: r.positive,
            negative: r.negative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::default_adapter::PolarityReport;

    struct Fixed;
    impl PolarityAnalyzer for Fixed {
        fn analyze(&self, _text: &str) -> anyhow::Result<PolarityReport> {
            Ok(PolarityReport {
                score: 3,
                comparative: 0.75,
                positive: Some(vec!["good".into()]),
                negative: None,
            })
        }
        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn custom_strategy_leaves_comparative_to_composer() {
        let lex = Lexicon::new(vec!["nalla".into()], vec![]);
        let out = CustomLexiconStrategy::new(&lex).score("romba nalla").unwrap();
        assert_eq!(out.score, 1);
        assert_eq!(out.comparative, None);
        assert_eq!(out.positive, vec!["nalla"]);
    }

    #[test]
    fn default_strategy_passes_comparative_through() {
        let s = DefaultAnalyzerStrategy::new(&Fixed);
        let out = s.score("anything").unwrap();
        assert_eq!(out.comparative, Some(0.75));
        assert_eq!(out.positive, vec!["good"]);
        assert!(out.negative.is_empty());
    }

    #[test]
    fn scorer_for_dispatches_on_resolution() {
        let lex = Lexicon::new(vec!["nalla".into()], vec![]);
        let custom = scorer_for(Strategy::CustomLexicon(&lex), &Fixed)
            .score("romba nalla")
            .unwrap();
        assert_eq!(custom.comparative, None);
        assert_eq!(custom.positive, vec!["nalla"]);

        let default = scorer_for(Strategy::DefaultAnalyzer, &Fixed)
            .score("romba nalla")
            .unwrap();
        assert_eq!(default.comparative, Some(0.75));
        assert_eq!(default.score, 3);
    }
}
