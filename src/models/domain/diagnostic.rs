use serde::Serialize;
use thiserror::Error;

/// Content-quality problems found while normalizing question records.
///
/// None of these abort a quiz. They are logged and handed back next to the
/// normalized questions so bad rows can be traced to their source id.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityIssue {
    #[error("question {question_id}: only {valid_options} valid options, kept unreduced")]
    UnderfilledOptions {
        question_id: String,
        valid_options: usize,
    },

    #[error("question {question_id}: correct letter '{letter}' points at an empty slot, realigned to option {resolved_index}")]
    CorrectLetterRealigned {
        question_id: String,
        letter: String,
        resolved_index: usize,
    },

    #[error("question {question_id}: correct letter '{letter}' cannot be resolved, defaulted to option 0")]
    UnresolvableCorrectLetter { question_id: String, letter: String },

    #[error("question {question_id}: {valid_options} valid options, question skipped")]
    TooFewOptions {
        question_id: String,
        valid_options: usize,
    },
}

impl DataQualityIssue {
    pub fn question_id(&self) -> &str {
        match self {
            DataQualityIssue::UnderfilledOptions { question_id, .. }
            | DataQualityIssue::CorrectLetterRealigned { question_id, .. }
            | DataQualityIssue::UnresolvableCorrectLetter { question_id, .. }
            | DataQualityIssue::TooFewOptions { question_id, .. } => question_id,
        }
    }
}
