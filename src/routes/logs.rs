use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::AppState;
use crate::error::AppError;
use crate::models::{LogEntry, LogType, Visitor};

#[derive(Debug, Deserialize)]
pub struct LogForm {
    name: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/timein", post(time_in))
        // Path used by the first dashboard build; same handler.
        .route("/api/log", post(time_in))
        .route("/api/timeout", post(time_out))
}

async fn time_in(
    State(state): State<AppState>,
    Json(form): Json<LogForm>,
) -> Result<Json<Value>, AppError> {
    log_visit(&state, form, LogType::TimeIn, "The data successfully logged in.").await
}

async fn time_out(
    State(state): State<AppState>,
    Json(form): Json<LogForm>,
) -> Result<Json<Value>, AppError> {
    log_visit(&state, form, LogType::TimeOut, "Data successfully logged out.").await
}

async fn log_visit(
    state: &AppState,
    form: LogForm,
    log_type: LogType,
    message: &'static str,
) -> Result<Json<Value>, AppError> {
    let name = form.name.as_deref().unwrap_or("");
    if name.is_empty() {
        return Err(AppError::Validation("Name is required."));
    }

    // No ORDER BY: with duplicate names, which row wins is the storage
    // engine's choice, and name comparison uses the engine's default
    // collation.
    let visitor: Option<Visitor> = sqlx::query_as(
        r#"
        SELECT uid, name, position, student_id, program, college, year_level, address, purpose
        FROM visitors
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(&state.db)
    .await?;

    let Some(visitor) = visitor else {
        return Err(AppError::NotFound("Visitor not found."));
    };

    tracing::debug!(uid = visitor.uid, %name, %log_type, "logging visit");

    let entry = LogEntry::snapshot(&visitor, log_type);

    // Second of two separate statements; the lookup above and this insert
    // do not share a transaction. Nothing checks the visitor's current
    // in/out state: repeated entries of the same type are allowed.
    sqlx::query(
        r#"
        INSERT INTO logs (uid, name, position, student_id, program, college, year_level, address, purpose, log_time, log_type)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.uid)
    .bind(&entry.name)
    .bind(&entry.position)
    .bind(&entry.student_id)
    .bind(&entry.program)
    .bind(&entry.college)
    .bind(&entry.year_level)
    .bind(&entry.address)
    .bind(&entry.purpose)
    .bind(&entry.log_time)
    .bind(entry.log_type)
    .execute(&state.db)
    .await?;

    Ok(Json(json!({ "success": true, "message": message })))
}
