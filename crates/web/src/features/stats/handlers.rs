use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::stats::DailyStats;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stats/today",
    responses(
        (status = 200, description = "Aggregate statistics over today's assessments", body = DailyStats)
    ),
    tag = "stats"
)]
pub async fn today_stats(State(state): State<AppState>) -> Result<Response, WebError> {
    let stats = services::today_stats(&state.store);

    Ok(Json(stats).into_response())
}
