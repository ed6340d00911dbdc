//! Substring scorer for custom-lexicon languages.
//!
//! Every term is tested once with plain `contains` on the case-folded text:
//! - no word boundaries ("super" matches inside "superb"),
//! - no suppression of terms contained in another matched phrase
//!   ("bagundi" and "chala bagundi" both count),
//! - matches are reported with the lexicon's own spelling, in list order.
//!
//! Cost is O(#terms x text length) per call. Lexicons are small and fixed at
//! startup, so this stays a plain loop; a multi-pattern automaton would be
//! the next step if lexicons grow by orders of magnitude.

use crate::lexicon::Lexicon;

/// Raw output of the lexicon scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconScore {
    pub score: i32,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Scan `normalized` for every lexicon term.
pub fn score(normalized: &str, lexicon: &Lexicon) -> LexiconScore {
    let haystack = normalized.to_lowercase();
    let mut out = LexiconScore::default();

    for term in lexicon.positive() {
        if haystack.contains(term.to_lowercase().as_str()) {
            out.score += 1;
            out.positive.push(term.clone());
        }
    }

    for term in lexicon.negative() {
        if haystack.contains(term.to_lowercase().as_str()) {
            out.score -= 1;
            out.negative.push(term.clone());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telugu() -> Lexicon {
        Lexicon::new(
            vec![
                "bagundi".into(),
                "chala bagundi".into(),
                "manchidi".into(),
                "chala manchidi".into(),
            ],
            vec!["chetha".into(), "chala chetha".into()],
        )
    }

    #[test]
    fn phrase_and_contained_word_both_score() {
        let r = score("chala bagundi", &telugu());
        assert_eq!(r.score, 2);
        assert_eq!(r.positive, vec!["bagundi", "chala bagundi"]);
        assert!(r.negative.is_empty());
    }

    #[test]
    fn case_insensitive_but_reports_lexicon_spelling() {
        let lex = Lexicon::new(vec!["Super".into()], vec![]);
        let r = score("SUPERB movie", &lex);
        assert_eq!(r.score, 1);
        assert_eq!(r.positive, vec!["Super"]);
    }

    #[test]
    fn matches_inside_longer_words() {
        let lex = Lexicon::new(vec!["andam".into()], vec![]);
        let r = score("pandamonium", &lex);
        assert_eq!(r.positive, vec!["andam"]);
    }

    #[test]
    fn repeated_occurrences_count_once_per_term() {
        let r = score("bagundi bagundi bagundi", &telugu());
        assert_eq!(r.score, 1);
        assert_eq!(r.positive, vec!["bagundi"]);
    }

    #[test]
    fn duplicate_terms_count_twice() {
        let lex = Lexicon::new(vec!["goppa".into(), "goppa".into()], vec![]);
        let r = score("goppa", &lex);
        assert_eq!(r.score, 2);
        assert_eq!(r.positive, vec!["goppa", "goppa"]);
    }

    #[test]
    fn mixed_polarity_nets_out() {
        let r = score("manchidi kani chala chetha", &telugu());
        assert_eq!(r.positive, vec!["manchidi"]);
        assert_eq!(r.negative, vec!["chetha", "chala chetha"]);
        assert_eq!(r.score, -1);
    }

    #[test]
    fn no_match_is_zero() {
        let r = score("emi ledu", &telugu());
        assert_eq!(r, LexiconScore::default());
    }
}
