use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    middleware, Router,
};
use server::db::AppState;
use shared_types::AuthUser;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use tower::ServiceExt;

/// Tables to truncate before each test run (child tables before parents).
const ALL_TABLES: &str = "refresh_tokens, profiles, verifications, fraud_detection, \
    exams, system_status, users";

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Create the `<db>_test` database if needed and point `DATABASE_URL` at it.
async fn ensure_test_db() {
    let _ = dotenvy::dotenv();
    let original_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let (base_url, db_name) = original_url
        .rsplit_once('/')
        .expect("DATABASE_URL must contain a database name");
    let test_db_name = format!("{db_name}_test");
    let test_url = format!("{base_url}/{test_db_name}");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&format!("{base_url}/postgres"))
        .await
        .expect("Failed to connect to postgres admin database");

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&test_db_name)
            .fetch_one(&admin_pool)
            .await
            .expect("Failed to check for test database");

    if !exists {
        sqlx::query(&format!("CREATE DATABASE \"{test_db_name}\""))
            .execute(&admin_pool)
            .await
            .expect("Failed to create test database");
    }

    admin_pool.close().await;

    unsafe {
        std::env::set_var("DATABASE_URL", &test_url);
        if std::env::var("JWT_SECRET").is_err() {
            std::env::set_var("JWT_SECRET", "integration-test-secret");
        }
    }
}

/// Pool on the test database. The first call migrates and truncates.
pub async fn test_pool() -> Pool<Postgres> {
    if INITIALIZED.get().is_none() {
        ensure_test_db().await;
    }

    let pool = server::db::create_pool();

    if INITIALIZED.set(()).is_ok() {
        server::db::run_migrations(&pool).await;

        sqlx::query(&format!("TRUNCATE {ALL_TABLES} CASCADE"))
            .execute(&pool)
            .await
            .expect("Failed to truncate test tables");
    }

    pool
}

/// The production API router wrapped in the session middleware.
pub async fn test_app() -> Router {
    let pool = test_pool().await;
    let state = AppState { pool: pool.clone() };

    server::openapi::api_router(pool).layer(middleware::from_fn_with_state(
        state,
        server::auth::middleware::auth_middleware,
    ))
}

/// Unique email for test isolation.
pub fn unique_email(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis();
    format!("{prefix}_{ts}_{id}@test.exasecure.ai")
}

#[allow(dead_code)]
/// Insert a user directly with a hashed password.
pub async fn create_user(email: &str, password: &str) -> AuthUser {
    let pool = test_pool().await;
    let hash = server::auth::password::hash_password(password).unwrap();
    server::repo::user::create(&pool, email, &hash).await.unwrap()
}

/// Status, headers and body of one response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    /// Every `Set-Cookie` header value.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    /// The `name=value` pair of a set cookie, ready for a `Cookie` header.
    pub fn cookie_pair(&self, name: &str) -> Option<String> {
        self.set_cookies()
            .into_iter()
            .find(|c| c.starts_with(&format!("{name}=")))
            .and_then(|c| c.split(';').next().map(str::to_string))
    }
}

async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
/// GET with a raw `Cookie` header, e.g. `"exa_access=...; exa_refresh=..."`.
pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn get_with_bearer(app: &Router, uri: &str, token: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, json: &serde_json::Value) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn post_with_cookie(app: &Router, uri: &str, cookie: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

#[allow(dead_code)]
/// Sign in over REST and return the response.
pub async fn login(app: &Router, email: &str, password: &str) -> TestResponse {
    post_json(
        app,
        "/api/v1/auth/login",
        &serde_json::json!({ "email": email, "password": password }),
    )
    .await
}
