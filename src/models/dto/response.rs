use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    Category, Difficulty, NormalizedQuestion, QuestionType, QuizMode, QuizResult, SessionState,
};

pub const NO_QUESTIONS_MESSAGE: &str = "Aucune question disponible";

/// A question as shown while the session is open: no answer, no explanation.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub question_type: QuestionType,
    pub category: Category,
    pub difficulty: Difficulty,
    pub question_text: String,
    pub options: Vec<String>,
}

impl From<&NormalizedQuestion> for QuestionView {
    fn from(question: &NormalizedQuestion) -> Self {
        QuestionView {
            id: question.id.clone(),
            question_type: question.question_type,
            category: question.category,
            difficulty: question.difficulty,
            question_text: question.question_text.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_key: String,
    pub user_id: String,
    pub mode: QuizMode,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_number: Option<u32>,
    pub questions: Vec<QuestionView>,
    pub answers: HashMap<String, String>,
    pub current_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u32>,
    pub total_questions: usize,
    pub answered_count: usize,
    pub started_at: DateTime<Utc>,
}

impl From<&SessionState> for SessionView {
    fn from(state: &SessionState) -> Self {
        SessionView {
            session_key: state.session_key.clone(),
            user_id: state.user_id.clone(),
            mode: state.mode,
            category: state.category,
            exam_type: state.exam_type.clone(),
            test_number: state.test_number,
            questions: state.questions.iter().map(QuestionView::from).collect(),
            answers: state.answers.clone(),
            current_index: state.current_index,
            remaining_seconds: state.remaining_seconds,
            total_questions: state.questions.len(),
            answered_count: state.answered_count(),
            started_at: state.started_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StartQuizResponse {
    pub session: SessionView,
    pub diagnostics: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StartQuizResponse {
    pub fn new(state: &SessionState, diagnostics: usize) -> Self {
        let message = state.is_empty().then(|| NO_QUESTIONS_MESSAGE.to_string());
        StartQuizResponse {
            session: SessionView::from(state),
            diagnostics,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

pub type SubmitQuizResponse = ApiResponse<QuizResult>;

#[derive(Debug, Serialize)]
pub struct AbandonSessionResponse {
    pub message: String,
}
