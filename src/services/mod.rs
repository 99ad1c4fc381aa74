pub mod answer_resolver;
pub mod option_reducer;
pub mod question_normalizer;
pub mod quiz_session_service;
pub mod sampler;
pub mod scorer;

pub use quiz_session_service::{QuizSessionService, StartedSession};
