//! Text normalization shared by every scoring strategy.

use crate::error::AnalyzeError;

/// Trim and collapse every whitespace run into a single space.
///
/// Case is preserved: the normalized text is what the caller sees echoed back
/// and what the word count is taken from. Case folding for matching happens
/// inside the lexicon scorer.
pub fn normalize(text: &str) -> Result<String, AnalyzeError> {
    let out = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if out.is_empty() {
        return Err(AnalyzeError::InvalidInput);
    }
    Ok(out)
}

/// Number of whitespace-delimited tokens (0 for empty input).
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_whitespace() {
        let n = normalize("  chala \t\n bagundi\u{00A0} ra  ").unwrap();
        assert_eq!(n, "chala bagundi ra");
    }

    #[test]
    fn keeps_case() {
        assert_eq!(normalize("This  IS Fine.").unwrap(), "This IS Fine.");
    }

    #[test]
    fn empty_and_blank_are_invalid() {
        assert_eq!(normalize(""), Err(AnalyzeError::InvalidInput));
        assert_eq!(normalize(" \t\r\n "), Err(AnalyzeError::InvalidInput));
    }

    #[test]
    fn idempotent() {
        for s in ["a  b", " x ", "one\ttwo\nthree", "already clean"] {
            let once = normalize(s).unwrap();
            assert_eq!(normalize(&once).unwrap(), once);
        }
    }

    #[test]
    fn counts_words() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("chala bagundi"), 2);
        assert_eq!(word_count("  a   b c "), 3);
    }
}
