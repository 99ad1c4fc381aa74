pub mod request;
pub mod response;

pub use request::{HistoryParams, PauseRequest, RecordAnswerRequest, StartQuizRequest};
pub use response::{
    AbandonSessionResponse, ApiResponse, QuestionView, SessionView, StartQuizResponse,
    SubmitQuizResponse,
};
