use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizMode;
use crate::services::sampler::DifficultyMix;

/// One day; matches the cap on a paused session's remaining seconds.
pub const MAX_MOCK_EXAM_MINUTES: u32 = 1440;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub questions_collection: String,
    pub results_collection: String,
    pub sessions_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub quiz_question_limit: usize,
    pub practice_test_question_limit: usize,
    pub mock_exam_question_limit: usize,
    pub mock_exam_duration_minutes: u32,
    /// Exam tracks whose mock exams show three options instead of four.
    pub three_option_exam_types: Vec<String>,
    pub mock_exam_mix: DifficultyMix,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> Self {
        let mock_exam_mix = match env::var("MOCK_EXAM_DIFFICULTY_MIX") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring MOCK_EXAM_DIFFICULTY_MIX: {}", e);
                DifficultyMix::default()
            }),
            Err(_) => DifficultyMix::default(),
        };

        Self {
            mongo_conn_string: SecretString::from(env_or(
                "MONGO_CONN_STRING",
                "mongodb://localhost:27017",
            )),
            mongo_db_name: env_or("MONGO_DB_NAME", "prepa-local"),
            questions_collection: env_or("QUESTIONS_COLLECTION", "questions"),
            results_collection: env_or("RESULTS_COLLECTION", "quiz_results"),
            sessions_collection: env_or("SESSIONS_COLLECTION", "session_states"),
            web_server_host: env_or("WEB_SERVER_HOST", "localhost"),
            web_server_port: env_parsed("WEB_SERVER_PORT", 8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            quiz_question_limit: env_parsed("QUIZ_QUESTION_LIMIT", 10),
            practice_test_question_limit: env_parsed("PRACTICE_TEST_QUESTION_LIMIT", 20),
            mock_exam_question_limit: env_parsed("MOCK_EXAM_QUESTION_LIMIT", 40),
            mock_exam_duration_minutes: env_parsed("MOCK_EXAM_DURATION_MINUTES", 60),
            three_option_exam_types: parse_list(&env_or("THREE_OPTION_EXAM_TYPES", "")),
            mock_exam_mix,
        }
    }

    /// Rejects settings the engine cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.mock_exam_mix.total() != 100 {
            return Err(AppError::ValidationError(format!(
                "Mock exam difficulty mix must add up to 100, got {}",
                self.mock_exam_mix.total()
            )));
        }

        let limits = [
            ("QUIZ_QUESTION_LIMIT", self.quiz_question_limit),
            ("PRACTICE_TEST_QUESTION_LIMIT", self.practice_test_question_limit),
            ("MOCK_EXAM_QUESTION_LIMIT", self.mock_exam_question_limit),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, limit)| *limit == 0) {
            return Err(AppError::ValidationError(format!("{} must be positive", name)));
        }

        if !(1..=MAX_MOCK_EXAM_MINUTES).contains(&self.mock_exam_duration_minutes) {
            return Err(AppError::ValidationError(format!(
                "MOCK_EXAM_DURATION_MINUTES must be between 1 and {}, got {}",
                MAX_MOCK_EXAM_MINUTES, self.mock_exam_duration_minutes
            )));
        }

        Ok(())
    }

    pub fn question_limit(&self, mode: QuizMode) -> usize {
        match mode {
            QuizMode::Quiz => self.quiz_question_limit,
            QuizMode::PracticeTest => self.practice_test_question_limit,
            QuizMode::MockExam => self.mock_exam_question_limit,
        }
    }

    /// Three-option presentation applies to mock exams of the listed tracks.
    pub fn requires_three_options(&self, mode: QuizMode, exam_type: Option<&str>) -> bool {
        mode == QuizMode::MockExam
            && exam_type.is_some_and(|exam_type| {
                let exam_type = exam_type.trim().to_lowercase();
                self.three_option_exam_types.iter().any(|t| *t == exam_type)
            })
    }

    pub fn mock_exam_seconds(&self) -> u32 {
        self.mock_exam_duration_minutes.saturating_mul(60)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.mongo_db_name.is_empty());
        assert_eq!(config.mock_exam_mix.total(), 100);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "prepa-test");
        assert_eq!(config.results_collection, "quiz_results");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn question_limit_depends_on_mode() {
        let config = Config::test_config();
        assert_eq!(config.question_limit(QuizMode::Quiz), 10);
        assert_eq!(config.question_limit(QuizMode::PracticeTest), 20);
        assert_eq!(config.question_limit(QuizMode::MockExam), 40);
    }

    #[test]
    fn three_options_only_for_listed_tracks_in_mock_exams() {
        let config = Config::test_config();
        assert!(config.requires_three_options(QuizMode::MockExam, Some("ENA")));
        assert!(!config.requires_three_options(QuizMode::MockExam, Some("irA")));
        assert!(!config.requires_three_options(QuizMode::MockExam, None));
        assert!(!config.requires_three_options(QuizMode::Quiz, Some("ena")));
    }

    #[test]
    fn validate_rejects_zero_limits_and_bad_mix() {
        let mut config = Config::test_config();
        config.quiz_question_limit = 0;
        assert!(matches!(config.validate(), Err(AppError::ValidationError(_))));

        let mut config = Config::test_config();
        config.mock_exam_mix = DifficultyMix {
            easy: 50,
            medium: 50,
            hard: 50,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn mock_exam_duration_is_bounded() {
        let mut config = Config::test_config();
        assert_eq!(config.mock_exam_seconds(), 3600);

        config.mock_exam_duration_minutes = 100_000_000;
        assert!(matches!(config.validate(), Err(AppError::ValidationError(_))));
        assert_eq!(config.mock_exam_seconds(), u32::MAX);

        config.mock_exam_duration_minutes = 0;
        assert!(config.validate().is_err());

        config.mock_exam_duration_minutes = MAX_MOCK_EXAM_MINUTES;
        assert!(config.validate().is_ok());
        assert_eq!(config.mock_exam_seconds(), 86_400);
    }

    #[test]
    fn list_parsing_trims_and_lowercases() {
        assert_eq!(parse_list(" ENA, ira ,,"), vec!["ena", "ira"]);
        assert!(parse_list("").is_empty());
    }
}
