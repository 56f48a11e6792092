use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{model::api::HealthDto, server::state::AppState};

pub static HEALTH_TAG: &str = "health";

#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is up", body = HealthDto),
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto::healthy(Utc::now(), state.uptime())),
    )
}
