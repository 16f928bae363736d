use axum::{extract::State, Json};
use shared_types::{AppError, DashboardSnapshot, SystemStatus};
use sqlx::{Pool, Postgres};

use crate::auth::extractors::AuthRequired;
use crate::repo;

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Summary counts and the newest verifications", body = DashboardSnapshot),
        (status = 401, description = "Not signed in", body = AppError),
        (status = 500, description = "Internal server error", body = AppError)
    ),
    tag = "dashboard",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, _auth))]
pub async fn get_dashboard(
    State(pool): State<Pool<Postgres>>,
    _auth: AuthRequired,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let (exams, fraud_flags, verifications) = tokio::try_join!(
        repo::exam::list_statuses(&pool),
        repo::fraud_flag::list_ids(&pool),
        repo::verification::list_recent(&pool),
    )?;

    Ok(Json(DashboardSnapshot::from_collections(
        Some(exams),
        Some(fraud_flags),
        Some(verifications),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/system-status",
    responses(
        (status = 200, description = "Platform health; operational when no row exists", body = SystemStatus),
        (status = 401, description = "Not signed in", body = AppError),
        (status = 500, description = "Internal server error", body = AppError)
    ),
    tag = "dashboard",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(pool, _auth))]
pub async fn get_system_status(
    State(pool): State<Pool<Postgres>>,
    _auth: AuthRequired,
) -> Result<Json<SystemStatus>, AppError> {
    let row = repo::system_status::current(&pool).await?;
    Ok(Json(SystemStatus::from_record(row.as_ref())))
}
