use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Call once at startup so `uptime_seconds` counts from boot.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// `ok` when the store answered, `degraded` otherwise.
    pub status: String,
    pub db: String,
    pub uptime_seconds: u64,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is up; `db` reports store reachability", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> Json<HealthResponse> {
    let (status, db) = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
    {
        Ok(_) => ("ok", "connected".to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach the store");
            ("degraded", format!("error: {e}"))
        }
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: status.to_string(),
        db,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
