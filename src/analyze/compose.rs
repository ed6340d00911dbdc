//! Result composition: word count, comparative and category.
//! Pure, no I/O; never touches the lexicon store.

use serde::Serialize;

use crate::analyze::strategy::StrategyOutcome;
use crate::normalize::word_count;

/// Sentiment category, derived only from the sign of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => SentimentCategory::Positive,
            s if s < 0 => SentimentCategory::Negative,
            _ => SentimentCategory::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::Neutral => "Neutral",
        }
    }
}

/// Finished analysis of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub normalized_text: String,
    pub language_code: String,
    pub language_display_name: String,
    pub sentiment_category: SentimentCategory,
    pub score: i32,
    pub comparative: f64,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
    pub word_count: usize,
}

/// Combine a strategy outcome with the request context.
///
/// `normalized` must be non-empty (the normalizer guarantees this), so the
/// word count is at least 1 and the division below is defined.
pub fn compose(
    language_code: &str,
    normalized: String,
    display_name: &str,
    outcome: StrategyOutcome,
) -> AnalysisResult {
    let words = word_count(&normalized);
    let comparative = match outcome.comparative {
        Some(c) => c,
        None if words > 0 => f64::from(outcome.score) / words as f64,
        None => 0.0,
    };

    AnalysisResult {
        normalized_text: normalized,
        language_code: language_code.to_string(),
        language_display_name: display_name.to_string(),
        sentiment_category: SentimentCategory::from_score(outcome.score),
        score: outcome.score,
        comparative,
        positive_words: outcome.positive,
        negative_words: outcome.negative,
        word_count: words,
    }
}
