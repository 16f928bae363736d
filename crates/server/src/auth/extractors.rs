use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::AppError;

use super::jwt::Claims;

/// Rejects with 401 unless the auth middleware attached valid claims.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Claims if present; never rejects.
pub struct MaybeAuth(pub Option<Claims>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(parts.extensions.get::<Claims>().cloned()))
    }
}
