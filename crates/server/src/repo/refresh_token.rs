use chrono::{DateTime, Utc};
use shared_types::AppError;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Remember the hash of an issued refresh token.
pub async fn store(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}

/// How long a rotated token may still be presented. Requests a browser
/// fires together all carry the same refresh cookie; only the first one
/// rotates it, the others arrive inside this window.
pub const REUSE_GRACE_SECONDS: f64 = 30.0;

/// Exchange a token for rotation. Returns `false` if it is unknown, expired,
/// belongs to someone else, was revoked by sign-out, or was rotated more
/// than [`REUSE_GRACE_SECONDS`] ago.
///
/// The first exchange stamps `rotated_at`; later exchanges inside the
/// window keep that stamp, so the window never slides.
pub async fn consume(pool: &Pool<Postgres>, user_id: Uuid, token_hash: &str) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE refresh_tokens
        SET revoked = TRUE, rotated_at = COALESCE(rotated_at, now())
        WHERE token_hash = $1 AND user_id = $2 AND expires_at > now()
          AND (revoked = FALSE OR rotated_at > now() - make_interval(secs => $3))
        "#,
    )
    .bind(token_hash)
    .bind(user_id)
    .bind(REUSE_GRACE_SECONDS)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected() == 1)
}

/// Revoke every token of a user that could still start a session (sign-out),
/// including ones inside the rotation grace window.
pub async fn revoke_all(pool: &Pool<Postgres>, user_id: Uuid) -> Result<u64, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE refresh_tokens SET revoked = TRUE, rotated_at = NULL
        WHERE user_id = $1 AND (revoked = FALSE OR rotated_at IS NOT NULL)
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(result.rows_affected())
}
