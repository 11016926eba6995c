use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{error, instrument};

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthResponse {
    Ok { user_count: i64 },
    Error { error: String },
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Liveness probe: reports the number of users, or the store error.
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Response {
    match state.store.count_users().await {
        Ok(user_count) => Json(HealthResponse::Ok { user_count }).into_response(),
        Err(e) => {
            error!(error = %e, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::Error {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
