use dioxus::prelude::*;
use shared_types::AppError;

use crate::auth::{cookies, jwt};
use crate::error_convert::AppErrorExt;

/// Claims of the caller, if signed in.
///
/// Prefers what the auth middleware attached; falls back to reading the
/// access cookie for requests that bypassed the middleware.
pub(crate) fn current_claims() -> Option<jwt::Claims> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.clone());
    }

    cookies::extract_access_token(&parts.headers)
        .and_then(|token| jwt::validate_access_token(&token).ok())
}

/// Claims of the caller, or an `Unauthorized` error.
pub(crate) fn require_auth() -> Result<jwt::Claims, ServerFnError> {
    current_claims()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}
