pub mod quiz_session_handler;
pub mod result_handler;

use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

pub use quiz_session_handler::{
    abandon_quiz_session, pause_quiz_session, record_answer, resume_quiz_session,
    start_quiz_session, submit_quiz_session,
};
pub use result_handler::get_user_results;

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_ok = match &state.db {
        Some(db) => db.health_check().await.is_ok(),
        None => true,
    };

    let response = serde_json::json!({
        "status": if db_ok { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_ok { "ok" } else { "error" }
        }
    });

    if db_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_ready)
        .service(start_quiz_session)
        .service(resume_quiz_session)
        .service(record_answer)
        .service(pause_quiz_session)
        .service(submit_quiz_session)
        .service(abandon_quiz_session)
        .service(get_user_results);
}
