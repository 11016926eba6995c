use tracing::{error, warn};

use crate::auth::{
    dto::{LoginRequest, SignupRequest},
    password::{hash_password, verify_password},
    repo_types::{NewUser, User},
};
use crate::error::ApiError;
use crate::store::{Store, StoreError};

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/identicon/svg";

/// Deterministic identicon URL seeded by the username.
///
/// The username is inserted verbatim, without percent-encoding, so characters
/// such as `&`, `#` or spaces end up unescaped in the query string.
pub fn avatar_url(username: &str) -> String {
    format!("{AVATAR_BASE_URL}?seed={username}")
}

/// Creates a user unless the username or email is already taken.
pub async fn register(store: &dyn Store, req: SignupRequest) -> Result<User, ApiError> {
    if let Some(existing) = store
        .find_user_by_username_or_email(&req.username, &req.email)
        .await?
    {
        warn!(existing_id = existing.id, username = %req.username, email = %req.email, "user already exists");
        return Err(ApiError::DuplicateUser);
    }

    let password = hash_password(&req.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        ApiError::Store(e.to_string())
    })?;

    let profile_photo = req
        .profile_photo
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| avatar_url(&req.username));

    let new = NewUser {
        username: req.username,
        email: req.email,
        password,
        is_admin: req.is_admin.unwrap_or(false),
        profile_photo: Some(profile_photo),
    };

    // The existence check above is not atomic with the insert; the unique
    // indexes are what actually reject a concurrent duplicate.
    match store.insert_user(&new).await {
        Ok(user) => Ok(user),
        Err(StoreError::ConstraintViolation(msg)) => {
            warn!(username = %new.username, email = %new.email, detail = %msg, "duplicate rejected by constraint");
            Err(ApiError::DuplicateUser)
        }
        Err(e) => Err(e.into()),
    }
}

/// Looks up the user by email and checks the password.
///
/// Unknown email and wrong password are reported identically.
pub async fn authenticate(store: &dyn Store, req: &LoginRequest) -> Result<User, ApiError> {
    let Some(user) = store.find_user_by_email(&req.email).await? else {
        warn!(email = %req.email, "login unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&req.password, &user.password) {
        warn!(email = %req.email, user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    Ok(user)
}
