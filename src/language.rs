//! Language resolution: code -> display name + scoring strategy.
//!
//! Unknown codes are not an error. They get the baseline language's display
//! name and are scored by the default analyzer.

use serde::Serialize;
use std::collections::HashMap;

use crate::lexicon::{Lexicon, LexiconStore};

/// One row of the supported-languages table (`GET /languages`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

impl LanguageEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Which scorer handles a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy<'a> {
    /// Hand-authored term list for the language.
    CustomLexicon(&'a Lexicon),
    /// General-purpose word-polarity analyzer.
    DefaultAnalyzer,
}

impl Strategy<'_> {
    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::CustomLexicon(_) => "custom_lexicon",
            Strategy::DefaultAnalyzer => "default_analyzer",
        }
    }
}

/// Result of [`LanguageResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub display_name: &'a str,
    pub strategy: Strategy<'a>,
}

/// Static language table plus the lexicon store it routes into.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    entries: Vec<LanguageEntry>,
    index: HashMap<String, usize>,
    baseline: usize,
    lexicons: LexiconStore,
}

impl LanguageResolver {
    /// `baseline` must name a code present in `entries`; callers validate
    /// this when loading configuration. If it does not, the first entry is
    /// used as the baseline.
    pub fn new(entries: Vec<LanguageEntry>, baseline: &str, lexicons: LexiconStore) -> Self {
        let index: HashMap<String, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.code.clone(), i))
            .collect();
        let baseline = index.get(baseline).copied().unwrap_or(0);
        Self {
            entries,
            index,
            baseline,
            lexicons,
        }
    }

    /// Map a language code onto its display name and scorer.
    pub fn resolve(&self, code: &str) -> Resolution<'_> {
        let i = self.index.get(code).copied().unwrap_or(self.baseline);
        let display_name = self
            .entries
            .get(i)
            .map(|e| e.name.as_str())
            .unwrap_or("English");

        let strategy = match self.lexicons.get(code) {
            Some(lex) => Strategy::CustomLexicon(lex),
            None => Strategy::DefaultAnalyzer,
        };

        Resolution {
            display_name,
            strategy,
        }
    }

    /// Code requests fall back to when they name no language.
    pub fn baseline_code(&self) -> &str {
        self.entries
            .get(self.baseline)
            .map(|e| e.code.as_str())
            .unwrap_or("en")
    }

    /// Supported languages in table order.
    pub fn languages(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn lexicons(&self) -> &LexiconStore {
        &self.lexicons
    }
}
