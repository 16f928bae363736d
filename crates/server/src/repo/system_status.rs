use shared_types::{AppError, SystemStatusRecord};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// The global status row, if one has been written.
pub async fn current(pool: &Pool<Postgres>) -> Result<Option<SystemStatusRecord>, AppError> {
    sqlx::query_as::<_, SystemStatusRecord>("SELECT status FROM system_status LIMIT 1")
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Write `status` only if no row exists yet.
pub async fn ensure(pool: &Pool<Postgres>, status: &str) -> Result<(), AppError> {
    sqlx::query("INSERT INTO system_status (id, status) VALUES (1, $1) ON CONFLICT (id) DO NOTHING")
        .bind(status)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}
