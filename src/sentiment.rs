//! General-purpose word-polarity analyzer (AFINN-style).
//!
//! Used for languages without a hand-authored lexicon. Each token is looked
//! up in a word -> weight table (`sentiment_lexicon.json`, weights in -5..=5).
//! A negator within the previous three tokens inverts the token's weight.

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::analyze::default_adapter::{PolarityAnalyzer, PolarityReport};

const BUILTIN_LEXICON: &str = include_str!("../sentiment_lexicon.json");

/// How many preceding tokens are checked for a negator.
const NEGATION_WINDOW: usize = 3;

static RE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}']+").expect("token regex"));

#[derive(Debug, Clone)]
pub struct AfinnAnalyzer {
    weights: HashMap<String, i32>,
}

impl AfinnAnalyzer {
    /// Analyzer backed by the embedded word list.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json_str(BUILTIN_LEXICON).context("embedded sentiment lexicon")
    }

    /// `{"word": weight, ...}`; keys are lowercased on load.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let parsed: HashMap<String, i32> = serde_json::from_str(raw)?;
        let weights = parsed
            .into_iter()
            .map(|(w, s)| (w.to_lowercase(), s))
            .collect();
        Ok(Self { weights })
    }

    /// Weight for a lowercased token (0 if unknown).
    #[inline]
    fn word_score(&self, w: &str) -> i32 {
        self.weights.get(w).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl PolarityAnalyzer for AfinnAnalyzer {
    fn analyze(&self, text: &str) -> anyhow::Result<PolarityReport> {
        let tokens: Vec<String> = tokenize(text).collect();
        let mut score: i32 = 0;
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for (i, tok) in tokens.iter().enumerate() {
            let base = self.word_score(tok);
            if base == 0 {
                continue;
            }
            let negated =
                (1..=NEGATION_WINDOW).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            let adj = if negated { -base } else { base };
            score += adj;
            if adj > 0 {
                positive.push(tok.clone());
            } else {
                negative.push(tok.clone());
            }
        }

        let comparative = if tokens.is_empty() {
            0.0
        } else {
            f64::from(score) / tokens.len() as f64
        };

        Ok(PolarityReport {
            score,
            comparative,
            positive: Some(positive),
            negative: Some(negative),
        })
    }

    fn name(&self) -> &'static str {
        "afinn"
    }
}

/// Lowercased runs of letters, digits and apostrophes ("isn't" stays whole).
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    RE_TOKEN
        .find_iter(s)
        .map(|m| m.as_str().trim_matches('\'').to_lowercase())
        .filter(|t| !t.is_empty())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "don't"
            | "doesn't"
            | "didn't"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "won't"
            | "can't"
            | "cannot"
            | "without"
    )
}
