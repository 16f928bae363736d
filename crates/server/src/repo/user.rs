use shared_types::{AppError, AuthUser};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Account row including the password hash. Never leaves the server.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

impl From<UserCredentials> for AuthUser {
    fn from(row: UserCredentials) -> Self {
        AuthUser {
            id: row.id,
            email: row.email,
        }
    }
}

/// Emails are matched case-insensitively.
pub async fn find_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<UserCredentials>, AppError> {
    sqlx::query_as::<_, UserCredentials>(
        "SELECT id, email, password_hash FROM users WHERE lower(email) = lower($1)",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<AuthUser>, AppError> {
    sqlx::query_as::<_, (Uuid, String)>("SELECT id, email FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map(|row| row.map(|(id, email)| AuthUser { id, email }))
        .map_err(SqlxErrorExt::into_app_error)
}

pub async fn create(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
) -> Result<AuthUser, AppError> {
    sqlx::query_as::<_, (Uuid, String)>(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id, email",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map(|(id, email)| AuthUser { id, email })
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn count(pool: &Pool<Postgres>) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}
