use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use crate::AppState;
use crate::colleges;
use crate::error::AppError;
use crate::models::LogType;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountResponse {
    total_remaining: i64,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/logs/count", get(count_remaining))
        .route("/api/logs/count/{code}", get(count_for_college))
}

/// Current occupancy: Time-In rows minus Time-Out rows over the whole
/// `logs` table. The two counts are independent queries, and the result
/// has no floor, so unmatched Time-Outs drive it negative.
async fn count_remaining(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let (time_in,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM logs WHERE log_type = ?")
        .bind(LogType::TimeIn)
        .fetch_one(&state.db)
        .await?;

    let (time_out,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM logs WHERE log_type = ?")
        .bind(LogType::TimeOut)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(CountResponse {
        total_remaining: time_in - time_out,
    }))
}

async fn count_for_college(
    Path(code): Path<String>,
) -> Result<Json<CountResponse>, AppError> {
    if !colleges::is_known_code(&code) {
        return Err(AppError::NotFound("Unknown college code."));
    }

    Ok(Json(CountResponse {
        total_remaining: colleges::remaining_for(&code),
    }))
}
