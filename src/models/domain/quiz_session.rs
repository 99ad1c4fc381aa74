use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::normalized_question::NormalizedQuestion;
use crate::models::domain::question::Category;
use crate::models::domain::score::ScoringMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizMode {
    Quiz,         // Daily practice
    PracticeTest, // Fixed or daily practice test
    MockExam,     // Timed, difficulty tiered, penalty scored
}

impl QuizMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizMode::Quiz => "quiz",
            QuizMode::PracticeTest => "practice-test",
            QuizMode::MockExam => "mock-exam",
        }
    }

    pub fn scoring_mode(&self) -> ScoringMode {
        match self {
            QuizMode::MockExam => ScoringMode::Penalty,
            QuizMode::Quiz | QuizMode::PracticeTest => ScoringMode::Percentage,
        }
    }
}

/// In-progress quiz kept by the session store so it can be paused and resumed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionState {
    pub session_key: String,
    pub user_id: String,
    pub mode: QuizMode,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_number: Option<u32>,
    pub questions: Vec<NormalizedQuestion>,
    #[serde(default)]
    pub answers: HashMap<String, String>,
    pub current_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u32>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new(
        user_id: &str,
        mode: QuizMode,
        category: Category,
        exam_type: Option<String>,
        test_number: Option<u32>,
        questions: Vec<NormalizedQuestion>,
        remaining_seconds: Option<u32>,
    ) -> Self {
        let now = Utc::now();
        SessionState {
            session_key: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            mode,
            category,
            exam_type,
            test_number,
            questions,
            answers: HashMap::new(),
            current_index: 0,
            remaining_seconds,
            started_at: now,
            updated_at: now,
        }
    }

    pub fn has_question(&self, question_id: &str) -> bool {
        self.questions.iter().any(|q| q.id == question_id)
    }

    /// Stores the answer and moves the cursor past the answered question.
    pub fn record_answer(&mut self, question_id: &str, answer: &str) -> bool {
        let Some(position) = self.questions.iter().position(|q| q.id == question_id) else {
            return false;
        };

        self.answers
            .insert(question_id.to_string(), answer.to_string());
        let next = (position + 1).min(self.questions.len().saturating_sub(1)) as u32;
        self.current_index = self.current_index.max(next);
        self.updated_at = Utc::now();
        true
    }

    pub fn answered_count(&self) -> usize {
        self.answers
            .iter()
            .filter(|(id, answer)| !answer.trim().is_empty() && self.has_question(id))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
