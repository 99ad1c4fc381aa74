pub mod question_repository;
pub mod quiz_result_repository;
pub mod session_state_repository;

pub use question_repository::{MongoQuestionRepository, QuestionQuery, QuestionRepository};
pub use quiz_result_repository::{MongoQuizResultRepository, QuizResultRepository};
pub use session_state_repository::{MongoSessionStateStore, SessionStateStore};
