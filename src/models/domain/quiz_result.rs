use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::Category;
use crate::models::domain::quiz_session::{QuizMode, SessionState};
use crate::models::domain::score::ScoreReport;

/// A completed attempt, handed to the result store.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub id: String,
    pub user_id: String,
    pub test_type: QuizMode,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_number: Option<u32>,
    pub score: i32, // percentage, or net points for penalty scoring
    pub report: ScoreReport,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub unanswered_count: u32,
    pub total_count: u32,
    pub answers: Vec<AnsweredQuestion>,
    pub completed_at: DateTime<Utc>,
}

/// What the learner saw and answered, kept for review.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnsweredQuestion {
    pub question_id: String,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted: Option<String>,
    pub is_correct: bool,
    pub explanation: String,
}

impl QuizResult {
    pub fn from_session(
        state: &SessionState,
        report: ScoreReport,
        answers: Vec<AnsweredQuestion>,
    ) -> Self {
        let total_count = answers.len() as u32;
        let correct_count = answers.iter().filter(|a| a.is_correct).count() as u32;
        let unanswered_count = answers.iter().filter(|a| a.submitted.is_none()).count() as u32;

        QuizResult {
            id: Uuid::new_v4().to_string(),
            user_id: state.user_id.clone(),
            test_type: state.mode,
            category: state.category,
            exam_type: state.exam_type.clone(),
            test_number: state.test_number,
            score: report.headline(),
            report,
            correct_count,
            incorrect_count: total_count - correct_count - unanswered_count,
            unanswered_count,
            total_count,
            answers,
            completed_at: Utc::now(),
        }
    }
}
