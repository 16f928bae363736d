use axum::Router;
use shared_types::{
    AppError, AppErrorKind, AuthUser, DashboardSnapshot, DashboardSummary, LoginRequest,
    SystemStatus, VerificationRecord,
};
use sqlx::{Pool, Postgres};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rest::login,
        rest::logout,
        rest::get_dashboard,
        rest::get_system_status,
    ),
    components(schemas(
        AppError, AppErrorKind, AuthUser, LoginRequest,
        DashboardSnapshot, DashboardSummary, VerificationRecord, SystemStatus,
        health::HealthResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Session sign-in and sign-out"),
        (name = "dashboard", description = "Verification overview reads"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "ExaSecure AI API",
        description = "Read API behind the ExaSecure verification dashboard",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Health check, the REST mirror and the Scalar docs at `/docs`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
