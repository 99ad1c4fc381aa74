use serde::{Deserialize, Serialize};

use crate::models::domain::question::{Category, Difficulty};

/// How a question is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    #[serde(other)]
    Unknown,
}

/// Shape of the stored option slots, decided once when a record is ingested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    FourOption,
    TwoOption,
    SparseOption,
}

impl QuestionKind {
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionKind::TwoOption => QuestionType::TrueFalse,
            QuestionKind::FourOption | QuestionKind::SparseOption => QuestionType::MultipleChoice,
        }
    }
}

/// A question ready to be shown, built fresh for one quiz session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NormalizedQuestion {
    pub id: String,
    pub question_type: QuestionType,
    pub kind: QuestionKind,
    pub category: Category,
    pub difficulty: Difficulty,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    #[serde(default)]
    pub reduced: bool,
}

impl NormalizedQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}
