use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, error, instrument, warn};

use crate::{
    auth::dto::PublicUser,
    error::ApiError,
    state::AppState,
};

use super::dto::{AnswerItem, QuestionItem, UserDetails};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/:user_id", get(get_user))
        .route("/users", get(list_users))
}

/// An id that is not an integer cannot name a user, so it is a 404 like any
/// other unknown id.
#[instrument(skip(state, user_id))]
pub async fn get_user(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserDetails>, ApiError> {
    let user_id = match user_id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "user id is not an integer");
            return Err(ApiError::NotFound);
        }
    };
    let store = state.store.as_ref();

    let Some(user) = store.get_user(user_id).await.map_err(|e| {
        error!(error = %e, user_id, "get_user failed");
        ApiError::from(e)
    })?
    else {
        warn!(user_id, "user not found");
        return Err(ApiError::NotFound);
    };

    let questions = store.questions_by_user(user.id).await.map_err(|e| {
        error!(error = %e, user_id, "questions_by_user failed");
        ApiError::from(e)
    })?;
    let answers = store.answers_by_user(user.id).await.map_err(|e| {
        error!(error = %e, user_id, "answers_by_user failed");
        ApiError::from(e)
    })?;

    debug!(user_id, questions = questions.len(), answers = answers.len(), "user loaded");
    Ok(Json(UserDetails {
        user: user.into(),
        questions: questions.into_iter().map(QuestionItem::from).collect(),
        answers: answers.into_iter().map(AnswerItem::from).collect(),
    }))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = state.store.list_users().await.map_err(|e| {
        error!(error = %e, "list_users failed");
        ApiError::from(e)
    })?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}
