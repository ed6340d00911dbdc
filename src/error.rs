//! Error taxonomy for a single analysis request.
//!
//! Startup and configuration failures are reported through `anyhow` instead;
//! this type only covers what a caller of [`crate::analyze::SentimentEngine`]
//! can observe per request.

use thiserror::Error;

/// Errors surfaced by the analysis pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// Text was missing or empty after trimming. Nothing was analyzed.
    #[error("Please provide some text to analyze")]
    InvalidInput,

    /// The default polarity analyzer failed. Carries the collaborator's message.
    #[error("Error analyzing text: {0}")]
    AnalysisFailure(String),
}

impl AnalyzeError {
    /// Short, stable message safe to show in any environment.
    pub fn public_message(&self) -> &'static str {
        match self {
            AnalyzeError::InvalidInput => "Please provide some text to analyze",
            AnalyzeError::AnalysisFailure(_) => "Error analyzing text",
        }
    }

    /// Underlying detail, only meant for development builds of the API.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AnalyzeError::InvalidInput => None,
            AnalyzeError::AnalysisFailure(msg) => Some(msg.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_detail_out_of_public_message() {
        let e = AnalyzeError::AnalysisFailure("lexicon blew up".into());
        assert_eq!(e.public_message(), "Error analyzing text");
        assert_eq!(e.detail(), Some("lexicon blew up"));
        assert!(e.to_string().contains("lexicon blew up"));
    }

    #[test]
    fn invalid_input_has_no_detail() {
        assert_eq!(AnalyzeError::InvalidInput.detail(), None);
    }
}
