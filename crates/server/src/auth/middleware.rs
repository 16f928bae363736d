use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use sqlx::{Pool, Postgres};

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::validate_access_token;

/// Resolves the session for every request without rejecting any.
///
/// 1. A valid access token (cookie or Bearer) puts `Claims` in the request
///    extensions.
/// 2. Otherwise a valid refresh cookie is rotated: the old token is revoked,
///    new claims are attached and new cookies go out with the response.
/// 3. A `CookieSlot` is attached so server functions can set or clear the
///    session cookies; its action is applied after the handler runs.
///
/// Rotated cookies are dropped when the handler sets session cookies itself.
///
/// Handlers decide whether a session is required.
pub async fn auth_middleware(
    State(pool): State<Pool<Postgres>>,
    mut req: Request,
    next: Next,
) -> Response {
    let headers = req.headers().clone();
    let mut rotated = None;

    let claims = cookies::extract_access_token(&headers)
        .and_then(|token| validate_access_token(&token).ok());

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(claims);
        }
        None => {
            if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
                if let Some((claims, session)) =
                    super::rotate_session(&pool, &refresh_token).await
                {
                    tracing::debug!(user_id = %claims.sub, "session refreshed");
                    req.extensions_mut().insert(claims);
                    rotated = Some(session);
                }
            }
        }
    }

    let slot = CookieSlot::default();
    req.extensions_mut().insert(slot.clone());

    let mut response = next.run(req).await;

    // An explicit action from the handler (login, logout) wins over rotation
    match slot.take() {
        Some(PendingCookieAction::Set {
            access_token,
            refresh_token,
        }) => cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token),
        Some(PendingCookieAction::Clear) => cookies::clear_auth_cookies(response.headers_mut()),
        None => {
            if let Some(session) = rotated {
                if !cookies::sets_session_cookie(response.headers()) {
                    cookies::set_auth_cookies(
                        response.headers_mut(),
                        &session.access_token,
                        &session.refresh_token,
                    );
                }
            }
        }
    }

    response
}
