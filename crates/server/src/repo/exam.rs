use shared_types::{AppError, ExamRecord};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Status of every exam. Only the count and the active count are used.
pub async fn list_statuses(pool: &Pool<Postgres>) -> Result<Vec<ExamRecord>, AppError> {
    sqlx::query_as::<_, ExamRecord>("SELECT status FROM exams")
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

pub async fn count(pool: &Pool<Postgres>) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM exams")
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

pub async fn insert(pool: &Pool<Postgres>, title: &str, status: &str) -> Result<(), AppError> {
    sqlx::query("INSERT INTO exams (title, status) VALUES ($1, $2)")
        .bind(title)
        .bind(status)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}
