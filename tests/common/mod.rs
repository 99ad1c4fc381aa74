#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use secrecy::SecretString;
use tokio::sync::RwLock;

use prepa_concours_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Category, Difficulty, QuestionRecord, QuizResult, SessionState},
    repositories::{QuestionQuery, QuestionRepository, QuizResultRepository, SessionStateStore},
    services::sampler::DifficultyMix,
};

/// Questions kept in insertion order, filtered the way the Mongo query filters.
pub struct InMemoryQuestionRepository {
    records: Arc<RwLock<Vec<QuestionRecord>>>,
}

impl InMemoryQuestionRepository {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn fetch_questions(&self, query: &QuestionQuery) -> AppResult<Vec<QuestionRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.category == query.category)
            .filter(|r| query.exam_type.is_none() || r.exam_type == query.exam_type)
            .filter(|r| match query.test_types.as_ref().filter(|t| !t.is_empty()) {
                Some(types) => r.test_type.as_ref().is_some_and(|t| types.contains(t)),
                None => true,
            })
            .filter(|r| query.test_number.is_none() || r.test_number == query.test_number)
            .cloned()
            .collect())
    }
}

pub struct InMemoryQuizResultRepository {
    results: Arc<RwLock<HashMap<String, QuizResult>>>,
}

impl InMemoryQuizResultRepository {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.results.read().await.len()
    }
}

#[async_trait]
impl QuizResultRepository for InMemoryQuizResultRepository {
    async fn save_result(&self, result: QuizResult) -> AppResult<QuizResult> {
        let mut results = self.results.write().await;
        if results.contains_key(&result.id) {
            return Err(AppError::DatabaseError(format!(
                "Result with id '{}' already exists",
                result.id
            )));
        }
        results.insert(result.id.clone(), result.clone());
        Ok(result)
    }

    async fn list_for_user(&self, user_id: &str, limit: i64) -> AppResult<Vec<QuizResult>> {
        let results = self.results.read().await;
        let mut items: Vec<_> = results
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }
}

pub struct InMemorySessionStateStore {
    sessions: Arc<RwLock<HashMap<String, SessionState>>>,
}

impl InMemorySessionStateStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStateStore for InMemorySessionStateStore {
    async fn load(&self, session_key: &str) -> AppResult<Option<SessionState>> {
        Ok(self.sessions.read().await.get(session_key).cloned())
    }

    async fn save(&self, state: &SessionState) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .insert(state.session_key.clone(), state.clone());
        Ok(())
    }

    async fn record_answer(
        &self,
        session_key: &str,
        question_id: &str,
        answer: &str,
        current_index: u32,
    ) -> AppResult<Option<SessionState>> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.get_mut(session_key).map(|state| {
            state
                .answers
                .insert(question_id.to_string(), answer.to_string());
            state.current_index = state.current_index.max(current_index);
            state.updated_at = Utc::now();
            state.clone()
        }))
    }

    async fn save_progress(
        &self,
        session_key: &str,
        current_index: Option<u32>,
        remaining_seconds: Option<u32>,
    ) -> AppResult<Option<SessionState>> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.get_mut(session_key).map(|state| {
            if let Some(index) = current_index {
                state.current_index = index;
            }
            if remaining_seconds.is_some() {
                state.remaining_seconds = remaining_seconds;
            }
            state.updated_at = Utc::now();
            state.clone()
        }))
    }

    async fn clear(&self, session_key: &str) -> AppResult<()> {
        self.sessions.write().await.remove(session_key);
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
        mongo_db_name: "prepa-test".to_string(),
        questions_collection: "questions".to_string(),
        results_collection: "quiz_results".to_string(),
        sessions_collection: "session_states".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        cors_allowed_origin: None,
        quiz_question_limit: 10,
        practice_test_question_limit: 20,
        mock_exam_question_limit: 40,
        mock_exam_duration_minutes: 60,
        three_option_exam_types: vec!["ena".to_string()],
        mock_exam_mix: DifficultyMix::default(),
    }
}

pub fn record(id: &str, category: Category, options: &[&str], correct_letter: &str) -> QuestionRecord {
    QuestionRecord {
        id: id.to_string(),
        category,
        question_text: format!("Question {}", id),
        options: options.iter().map(|o| Some(o.to_string())).collect(),
        correct_letter: correct_letter.to_string(),
        difficulty: Difficulty::Medium,
        exam_type: None,
        test_type: None,
        test_number: None,
        explanation: None,
        created_at: None,
    }
}

/// `count` four-option records for `category`, answer always `A`, cycling
/// easy/medium/hard, with increasing creation times.
pub fn question_bank(prefix: &str, category: Category, count: usize) -> Vec<QuestionRecord> {
    let tiers = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single();
    (0..count)
        .map(|i| {
            let id = format!("{}-{}", prefix, i);
            let options = [
                format!("{} correct", id),
                format!("{} wrong 1", id),
                format!("{} wrong 2", id),
                format!("{} wrong 3", id),
            ];
            let options: Vec<&str> = options.iter().map(String::as_str).collect();
            let mut record = record(&id, category, &options, "A");
            record.difficulty = tiers[i % 3];
            record.created_at = epoch.map(|t| t + Duration::minutes(i as i64));
            record
        })
        .collect()
}

pub struct TestApp {
    pub state: AppState,
    pub results: Arc<InMemoryQuizResultRepository>,
    pub sessions: Arc<InMemorySessionStateStore>,
}

pub fn test_app(records: Vec<QuestionRecord>) -> TestApp {
    let results = Arc::new(InMemoryQuizResultRepository::new());
    let sessions = Arc::new(InMemorySessionStateStore::new());
    let state = AppState::from_parts(
        Arc::new(InMemoryQuestionRepository::new(records)),
        results.clone(),
        sessions.clone(),
        test_config(),
    );

    TestApp {
        state,
        results,
        sessions,
    }
}
