use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        AbandonSessionResponse, PauseRequest, RecordAnswerRequest, SessionView,
        StartQuizRequest, StartQuizResponse, SubmitQuizResponse,
    },
};

#[post("/api/quiz-sessions")]
pub async fn start_quiz_session(
    state: web::Data<AppState>,
    request: web::Json<StartQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let started = state
        .quiz_session_service
        .start_quiz(request.into_inner())
        .await?;

    let response = StartQuizResponse::new(&started.state, started.diagnostics.len());
    if started.state.is_empty() {
        return Ok(HttpResponse::Ok().json(response));
    }
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/quiz-sessions/{session_key}")]
pub async fn resume_quiz_session(
    state: web::Data<AppState>,
    session_key: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_session_service.resume(&session_key).await?;
    Ok(HttpResponse::Ok().json(SessionView::from(&session)))
}

#[put("/api/quiz-sessions/{session_key}/answers")]
pub async fn record_answer(
    state: web::Data<AppState>,
    session_key: web::Path<String>,
    request: web::Json<RecordAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = state
        .quiz_session_service
        .record_answer(&session_key, &request.question_id, &request.answer)
        .await?;
    Ok(HttpResponse::Ok().json(SessionView::from(&session)))
}

#[post("/api/quiz-sessions/{session_key}/pause")]
pub async fn pause_quiz_session(
    state: web::Data<AppState>,
    session_key: web::Path<String>,
    request: web::Json<PauseRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .quiz_session_service
        .pause(&session_key, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(SessionView::from(&session)))
}

#[post("/api/quiz-sessions/{session_key}/submit")]
pub async fn submit_quiz_session(
    state: web::Data<AppState>,
    session_key: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = state.quiz_session_service.submit(&session_key).await?;
    Ok(HttpResponse::Ok().json(SubmitQuizResponse {
        data: result,
        message: "Quiz terminé".to_string(),
    }))
}

#[delete("/api/quiz-sessions/{session_key}")]
pub async fn abandon_quiz_session(
    state: web::Data<AppState>,
    session_key: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_session_service.abandon(&session_key).await?;
    Ok(HttpResponse::Ok().json(AbandonSessionResponse {
        message: format!("Session '{}' abandoned", session_key),
    }))
}
