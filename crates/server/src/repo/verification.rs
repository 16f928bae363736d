use chrono::{DateTime, Utc};
use shared_types::{AppError, VerificationRecord, RECENT_VERIFICATION_LIMIT};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// The newest verifications, newest first.
pub async fn list_recent(pool: &Pool<Postgres>) -> Result<Vec<VerificationRecord>, AppError> {
    sqlx::query_as::<_, VerificationRecord>(
        r#"
        SELECT id, candidate_name, verification_type, confidence_score, status,
               created_at, verification_code
        FROM verifications
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(RECENT_VERIFICATION_LIMIT as i64)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn count(pool: &Pool<Postgres>) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM verifications")
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Fields for a new verification row.
pub struct NewVerification<'a> {
    pub candidate_name: &'a str,
    pub verification_type: &'a str,
    pub confidence_score: f64,
    pub status: &'a str,
    pub verification_code: &'a str,
    pub created_at: DateTime<Utc>,
}

pub async fn insert(pool: &Pool<Postgres>, row: &NewVerification<'_>) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO verifications
            (candidate_name, verification_type, confidence_score, status, verification_code, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(row.candidate_name)
    .bind(row.verification_type)
    .bind(row.confidence_score)
    .bind(row.status)
    .bind(row.verification_code)
    .bind(row.created_at)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}
