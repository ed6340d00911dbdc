//! # Lexicon Store
//!
//! Per-language positive/negative term lists used by the substring scorer.
//!
//! - A term is a non-empty string, usually lowercase, possibly a phrase
//!   ("chala bagundi").
//! - List order is significant: matches are reported in list order.
//! - Duplicates are kept; they simply match more than once.
//!
//! The store is built once from configuration and only read afterwards.

use std::collections::HashMap;

/// Term lists for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Self {
        Self { positive, negative }
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// Total number of terms checked per scoring call.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable mapping `language code -> Lexicon`.
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    by_code: HashMap<String, Lexicon>,
}

impl LexiconStore {
    pub fn new(by_code: HashMap<String, Lexicon>) -> Self {
        Self { by_code }
    }

    /// Lexicon for `code`, if the language has one.
    pub fn get(&self, code: &str) -> Option<&Lexicon> {
        self.by_code.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Codes with a custom lexicon, sorted for stable output.
    pub fn codes(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.by_code.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
