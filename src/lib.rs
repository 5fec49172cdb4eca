pub mod cli;
pub mod colleges;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use axum::{Router, routing::get};
use sqlx::SqlitePool;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

async fn home() -> &'static str {
    "Welcome to the API server!"
}

async fn health() -> &'static str {
    "ok"
}

/// Build the full Axum application router.
///
/// Caller is responsible for running database migrations on `pool`
/// beforehand. The dashboard frontend is served from another origin, so
/// CORS is open.
pub fn build_app(pool: SqlitePool) -> Router {
    let state = AppState { db: pool };

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(routes::register::router())
        .merge(routes::logs::router())
        .merge(routes::counts::router())
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
