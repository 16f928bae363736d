use axum::extract::FromRef;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Shared state for the axum routes. `FromRef` lets handlers take
/// `State<Pool<Postgres>>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

/// Lazily created pool used by server functions.
static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATED: AtomicBool = AtomicBool::new(false);

/// Build a pool from `DATABASE_URL`. No connection opens until the first
/// query, so the pool is not tied to the runtime that created it.
///
/// Panics if `DATABASE_URL` is unset: the server cannot start without a store.
pub fn create_pool() -> Pool<Postgres> {
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(&database_url)
        .expect("DATABASE_URL is not a valid Postgres connection string")
}

pub async fn run_migrations(pool: &Pool<Postgres>) {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .expect("Failed to run database migrations");
}

/// The process-wide pool, migrated on first use.
pub async fn get_db() -> &'static Pool<Postgres> {
    let pool = POOL.get_or_init(create_pool);

    if !MIGRATED.swap(true, Ordering::SeqCst) {
        run_migrations(pool).await;
    }

    pool
}
