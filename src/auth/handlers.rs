use axum::{extract::State, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, SignupRequest},
        extractors::ValidJson,
        services,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = services::register(state.store.as_ref(), payload)
        .await
        .inspect_err(|e| match e {
            ApiError::Store(_) => error!(code = e.code(), error = %e, "signup failed"),
            _ => warn!(code = e.code(), "signup rejected"),
        })?;

    info!(user_id = user.id, username = %user.username, email = %user.email, "user registered");
    Ok(Json(AuthResponse {
        message: "User created successfully",
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = services::authenticate(state.store.as_ref(), &payload)
        .await
        .inspect_err(|e| match e {
            ApiError::Store(_) => error!(code = e.code(), error = %e, "login failed"),
            _ => warn!(code = e.code(), "login rejected"),
        })?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        message: "Login successful",
        user: user.into(),
    }))
}
