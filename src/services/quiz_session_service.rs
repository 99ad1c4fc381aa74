use std::sync::Arc;

use chrono::{Local, NaiveDate};
use validator::Validate;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{
        Category, DataQualityIssue, QuestionRecord, QuizMode, QuizResult, SessionState,
    },
    models::dto::request::{PauseRequest, StartQuizRequest},
    repositories::{QuestionQuery, QuestionRepository, QuizResultRepository, SessionStateStore},
    services::{
        question_normalizer::normalize_all,
        sampler::{daily_seed, distribute_by_difficulty, sample_for_test},
        scorer::{review_answers, score},
    },
};

/// A freshly started session and the data problems met while building it.
#[derive(Debug)]
pub struct StartedSession {
    pub state: SessionState,
    pub diagnostics: Vec<DataQualityIssue>,
}

pub struct QuizSessionService {
    question_repository: Arc<dyn QuestionRepository>,
    result_repository: Arc<dyn QuizResultRepository>,
    session_store: Arc<dyn SessionStateStore>,
    config: Arc<Config>,
}

fn session_gone(session_key: &str) -> AppError {
    AppError::NotFound(format!("Session '{}' not found", session_key))
}

impl QuizSessionService {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        result_repository: Arc<dyn QuizResultRepository>,
        session_store: Arc<dyn SessionStateStore>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            question_repository,
            result_repository,
            session_store,
            config,
        }
    }

    pub async fn start_quiz(&self, request: StartQuizRequest) -> AppResult<StartedSession> {
        self.start_quiz_on(request, Local::now().date_naive()).await
    }

    /// Starts a session as if today were `date`. The date only feeds the
    /// daily seed.
    pub async fn start_quiz_on(
        &self,
        request: StartQuizRequest,
        date: NaiveDate,
    ) -> AppResult<StartedSession> {
        request.validate()?;

        let mode = request.mode;
        let limit = request
            .limit
            .unwrap_or_else(|| self.config.question_limit(mode));
        let query = QuestionQuery {
            category: request.category,
            exam_type: request.exam_type.clone(),
            test_types: request.test_types.clone(),
            test_number: request.test_number,
        };

        let records = self.question_repository.fetch_questions(&query).await?;
        let sampled = self.sample(&records, mode, limit, request.test_number, request.category, date);

        let reduce = self
            .config
            .requires_three_options(mode, request.exam_type.as_deref());
        let batch = normalize_all(&sampled, reduce, &mut rand::rng());

        let remaining_seconds = (mode == QuizMode::MockExam).then(|| self.config.mock_exam_seconds());
        let state = SessionState::new(
            &request.user_id,
            mode,
            request.category,
            request.exam_type,
            request.test_number,
            batch.questions,
            remaining_seconds,
        );

        if state.is_empty() {
            log::info!(
                "No questions available for user {} ({} / {})",
                state.user_id,
                mode.as_str(),
                state.category
            );
            return Ok(StartedSession {
                state,
                diagnostics: batch.diagnostics,
            });
        }

        self.session_store.save(&state).await?;
        log::info!(
            "Started {} session {} for user {} with {} questions",
            mode.as_str(),
            state.session_key,
            state.user_id,
            state.questions.len()
        );

        Ok(StartedSession {
            state,
            diagnostics: batch.diagnostics,
        })
    }

    fn sample(
        &self,
        records: &[QuestionRecord],
        mode: QuizMode,
        limit: usize,
        test_number: Option<u32>,
        category: Category,
        date: NaiveDate,
    ) -> Vec<QuestionRecord> {
        match (mode, test_number) {
            (QuizMode::MockExam, None) => distribute_by_difficulty(
                records,
                limit,
                self.config.mock_exam_mix,
                daily_seed(date, category),
            ),
            _ => sample_for_test(records, limit, test_number, category, date),
        }
    }

    async fn load(&self, session_key: &str) -> AppResult<SessionState> {
        self.session_store
            .load(session_key)
            .await?
            .ok_or_else(|| session_gone(session_key))
    }

    pub async fn record_answer(
        &self,
        session_key: &str,
        question_id: &str,
        answer: &str,
    ) -> AppResult<SessionState> {
        let mut state = self.load(session_key).await?;

        if !state.record_answer(question_id, answer) {
            return Err(AppError::ValidationError(format!(
                "Question '{}' is not part of session '{}'",
                question_id, session_key
            )));
        }

        self.session_store
            .record_answer(session_key, question_id, answer, state.current_index)
            .await?
            .ok_or_else(|| session_gone(session_key))
    }

    pub async fn pause(&self, session_key: &str, request: PauseRequest) -> AppResult<SessionState> {
        request.validate()?;
        let state = self.load(session_key).await?;

        if let Some(index) = request.current_index {
            if index as usize >= state.questions.len() {
                return Err(AppError::ValidationError(format!(
                    "Question index {} is out of range",
                    index
                )));
            }
        }

        let state = self
            .session_store
            .save_progress(session_key, request.current_index, request.remaining_seconds)
            .await?
            .ok_or_else(|| session_gone(session_key))?;
        log::debug!("Paused session {} at question {}", session_key, state.current_index);
        Ok(state)
    }

    pub async fn resume(&self, session_key: &str) -> AppResult<SessionState> {
        self.load(session_key).await
    }

    /// Scores the session, stores the result and forgets the session.
    pub async fn submit(&self, session_key: &str) -> AppResult<QuizResult> {
        let state = self.load(session_key).await?;

        let report = score(&state.questions, &state.answers, state.mode.scoring_mode());
        let answers = review_answers(&state.questions, &state.answers);
        let result = QuizResult::from_session(&state, report, answers);

        let saved = self.result_repository.save_result(result).await?;
        self.session_store.clear(session_key).await?;

        log::info!(
            "User {} completed {} session {}: score {} ({}/{})",
            saved.user_id,
            saved.test_type.as_str(),
            session_key,
            saved.score,
            saved.correct_count,
            saved.total_count
        );
        Ok(saved)
    }

    pub async fn abandon(&self, session_key: &str) -> AppResult<()> {
        self.session_store.clear(session_key).await?;
        log::info!("Abandoned session {}", session_key);
        Ok(())
    }

    pub async fn history(&self, user_id: &str, limit: i64) -> AppResult<Vec<QuizResult>> {
        if user_id.trim().is_empty() {
            return Err(AppError::ValidationError("User id is required".to_string()));
        }
        self.result_repository.list_for_user(user_id, limit).await
    }
}
