use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Category, QuizMode};

fn default_mode() -> QuizMode {
    QuizMode::Quiz
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartQuizRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,

    pub category: Category,

    #[serde(default = "default_mode")]
    pub mode: QuizMode,

    #[validate(length(min = 1, max = 50))]
    pub exam_type: Option<String>,

    pub test_types: Option<Vec<String>>,

    #[validate(range(min = 1))]
    pub test_number: Option<u32>,

    // Overrides the per-mode question count from the config
    #[validate(range(min = 1, max = 200))]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAnswerRequest {
    #[validate(length(min = 1, max = 128))]
    pub question_id: String,

    #[validate(length(max = 1000))]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PauseRequest {
    pub current_index: Option<u32>,

    #[validate(range(max = 86400))]
    pub remaining_seconds: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HistoryParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self { limit: Some(20) }
    }
}

impl HistoryParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}
