use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::HistoryParams};

#[get("/api/users/{user_id}/results")]
pub async fn get_user_results(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    query: web::Query<HistoryParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    params.validate()?;

    let results = state
        .quiz_session_service
        .history(&user_id, params.limit())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}
