use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;

/// JSON body whose required fields are all present.
///
/// Malformed JSON, a missing field or a mistyped field reject with
/// [`ApiError::Validation`] before the handler runs. Field contents are not
/// inspected; an empty string counts as present.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            warn!(error = %rejection.body_text(), "rejected request body");
            ApiError::Validation(rejection.body_text())
        })?;
        Ok(ValidJson(value))
    }
}
