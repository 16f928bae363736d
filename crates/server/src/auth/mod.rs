pub mod cookies;
pub mod extractors;
pub mod jwt;
pub mod middleware;
pub mod password;

use shared_types::{AppError, AuthUser};
use sqlx::{Pool, Postgres};

use crate::repo;

/// A freshly minted access/refresh pair.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub access_token: String,
    pub refresh_token: String,
}

/// Check an email/password pair against the users table.
///
/// Unknown email and wrong password produce the same error so the
/// response does not reveal which accounts exist.
pub async fn authenticate(
    pool: &Pool<Postgres>,
    email: &str,
    password: &str,
) -> Result<AuthUser, AppError> {
    let invalid = || AppError::unauthorized("Invalid email or password");

    let user = repo::user::find_by_email(pool, email)
        .await?
        .ok_or_else(invalid)?;

    let valid = password::verify_password(password, &user.password_hash)
        .map_err(|e| AppError::internal(e.to_string()))?;
    if !valid {
        return Err(invalid());
    }

    Ok(user.into())
}

/// Sign both tokens for `user` and persist the refresh token's hash.
pub async fn issue_session(pool: &Pool<Postgres>, user: &AuthUser) -> Result<IssuedSession, AppError> {
    let access_token = jwt::create_access_token(user.id, &user.email)
        .map_err(|e| AppError::internal(e.to_string()))?;
    let (refresh_token, expires_at) = jwt::create_refresh_token(user.id, &user.email)
        .map_err(|e| AppError::internal(e.to_string()))?;

    repo::refresh_token::store(pool, user.id, &jwt::hash_token(&refresh_token), expires_at).await?;

    Ok(IssuedSession {
        access_token,
        refresh_token,
    })
}

/// Exchange a refresh token for a new session, revoking the old token.
///
/// Concurrent requests carrying the same token each get a session, as long
/// as they land within the reuse grace window of the first rotation.
/// Returns `None` if the token is invalid, expired, signed out, or was
/// rotated before that window.
pub async fn rotate_session(
    pool: &Pool<Postgres>,
    refresh_token: &str,
) -> Option<(jwt::Claims, IssuedSession)> {
    let claims = jwt::validate_refresh_token(refresh_token).ok()?;

    let consumed = repo::refresh_token::consume(pool, claims.sub, &jwt::hash_token(refresh_token))
        .await
        .map_err(|e| tracing::warn!(user_id = %claims.sub, error = %e, "refresh token lookup failed"))
        .ok()?;
    if !consumed {
        return None;
    }

    let user = AuthUser {
        id: claims.sub,
        email: claims.email,
    };
    let session = issue_session(pool, &user)
        .await
        .map_err(|e| tracing::error!(user_id = %user.id, error = %e, "failed to issue rotated session"))
        .ok()?;
    let access_claims = jwt::validate_access_token(&session.access_token).ok()?;

    Some((access_claims, session))
}
