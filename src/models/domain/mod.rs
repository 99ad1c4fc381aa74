pub mod diagnostic;
pub mod normalized_question;
pub mod question;
pub mod quiz_result;
pub mod quiz_session;
pub mod score;
pub use diagnostic::DataQualityIssue;
pub use normalized_question::{NormalizedQuestion, QuestionKind, QuestionType};
pub use question::{Category, Difficulty, QuestionRecord};
pub use quiz_result::{AnsweredQuestion, QuizResult};
pub use quiz_session::{QuizMode, SessionState};
pub use score::{PenaltyScore, ScoreReport, ScoringMode, SessionScore};
