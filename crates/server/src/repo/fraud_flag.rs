use shared_types::{AppError, FraudFlagRecord};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

pub async fn list_ids(pool: &Pool<Postgres>) -> Result<Vec<FraudFlagRecord>, AppError> {
    sqlx::query_as::<_, FraudFlagRecord>("SELECT id FROM fraud_detection")
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

pub async fn count(pool: &Pool<Postgres>) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fraud_detection")
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

pub async fn insert(
    pool: &Pool<Postgres>,
    detection_type: &str,
    severity: &str,
    details: &str,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO fraud_detection (detection_type, severity, details) VALUES ($1, $2, $3)")
        .bind(detection_type)
        .bind(severity)
        .bind(details)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}
