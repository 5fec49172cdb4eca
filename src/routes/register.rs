use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    address: Option<String>,
    purpose: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/register", post(register))
}

/// Join the non-empty name segments with single spaces. An absent or
/// empty middle name must not leave a doubled space in the stored value.
fn compose_name(first: &str, middle: Option<&str>, last: &str) -> String {
    [Some(first), middle, Some(last)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

async fn register(
    State(state): State<AppState>,
    Json(form): Json<RegisterForm>,
) -> Result<Json<Value>, AppError> {
    tracing::debug!(?form, "received registration");

    let first = form.first_name.as_deref().unwrap_or("");
    let last = form.last_name.as_deref().unwrap_or("");
    let address = form.address.as_deref().unwrap_or("");
    let purpose = form.purpose.as_deref().unwrap_or("");

    if first.is_empty() || last.is_empty() || address.is_empty() || purpose.is_empty() {
        return Err(AppError::Validation("Please fill out all required fields."));
    }

    if address.trim().chars().count() < 5 {
        return Err(AppError::Validation("Address must be at least 5 characters."));
    }

    if purpose.chars().count() < 3 {
        return Err(AppError::Validation("Purpose must be at least 3 characters."));
    }

    let name = compose_name(first, form.middle_name.as_deref(), last);

    sqlx::query("INSERT INTO visitors (name, position, purpose, address) VALUES (?, ?, ?, ?)")
        .bind(&name)
        .bind("Visitor")
        .bind(purpose)
        .bind(address)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Data successfully inserted.",
    })))
}
