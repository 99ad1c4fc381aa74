use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoQuestionRepository, MongoQuizResultRepository, MongoSessionStateStore,
        QuestionRepository, QuizResultRepository, SessionStateStore,
    },
    services::QuizSessionService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_session_service: Arc<QuizSessionService>,
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(
            &db,
            &config.questions_collection,
        ));
        question_repository.ensure_indexes().await?;

        let result_repository = Arc::new(MongoQuizResultRepository::new(
            &db,
            &config.results_collection,
        ));
        result_repository.ensure_indexes().await?;

        let session_store = Arc::new(MongoSessionStateStore::new(
            &db,
            &config.sessions_collection,
        ));
        session_store.ensure_indexes().await?;

        let mut state = Self::from_parts(
            question_repository,
            result_repository,
            session_store,
            config,
        );
        state.db = Some(db);
        Ok(state)
    }

    /// Wires the service over any repository implementations, without a database handle.
    pub fn from_parts(
        question_repository: Arc<dyn QuestionRepository>,
        result_repository: Arc<dyn QuizResultRepository>,
        session_store: Arc<dyn SessionStateStore>,
        config: Config,
    ) -> Self {
        let config = Arc::new(config);
        let quiz_session_service = Arc::new(QuizSessionService::new(
            question_repository,
            result_repository,
            session_store,
            Arc::clone(&config),
        ));

        Self {
            quiz_session_service,
            config,
            db: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
