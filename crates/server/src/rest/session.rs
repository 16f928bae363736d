use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use shared_types::{AppError, AuthUser, LoginRequest};
use sqlx::{Pool, Postgres};

use crate::auth::{self, cookies, extractors::MaybeAuth};
use crate::error_convert::ValidateRequest;
use crate::repo;

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; session cookies set", body = AuthUser),
        (status = 401, description = "Invalid credentials", body = AppError),
        (status = 422, description = "Malformed email or short password", body = AppError),
        (status = 500, description = "Internal server error", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(pool, payload), fields(email = %payload.email))]
pub async fn login(
    State(pool): State<Pool<Postgres>>,
    Json(payload): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<AuthUser>), AppError> {
    payload.validate_request()?;

    let user = auth::authenticate(&pool, payload.email.trim(), &payload.password).await?;
    let session = auth::issue_session(&pool, &user).await?;

    let mut headers = HeaderMap::new();
    cookies::set_auth_cookies(&mut headers, &session.access_token, &session.refresh_token);

    tracing::info!(user_id = %user.id, "signed in");
    Ok((headers, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Session revoked and cookies cleared"),
        (status = 500, description = "Internal server error", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(pool, auth))]
pub async fn logout(
    State(pool): State<Pool<Postgres>>,
    auth: MaybeAuth,
) -> Result<(StatusCode, HeaderMap), AppError> {
    if let Some(claims) = auth.0 {
        repo::refresh_token::revoke_all(&pool, claims.sub).await?;
    }

    let mut headers = HeaderMap::new();
    cookies::clear_auth_cookies(&mut headers);
    Ok((StatusCode::NO_CONTENT, headers))
}
