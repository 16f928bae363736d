use shared_types::{AppError, ProfileRecord};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// The profile row for `user_id`, if one exists.
pub async fn find_by_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Option<ProfileRecord>, AppError> {
    sqlx::query_as::<_, ProfileRecord>(
        "SELECT first_name, last_name, role FROM profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Insert or replace the profile for `user_id`.
pub async fn upsert(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    profile: &ProfileRecord,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO profiles (user_id, first_name, last_name, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id) DO UPDATE
        SET first_name = EXCLUDED.first_name,
            last_name = EXCLUDED.last_name,
            role = EXCLUDED.role,
            updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(profile.first_name.as_deref())
    .bind(profile.last_name.as_deref())
    .bind(&profile.role)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;
    Ok(())
}
