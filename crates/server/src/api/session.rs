use dioxus::prelude::*;
use shared_types::AuthUser;

#[cfg(feature = "server")]
use super::guard::current_claims;
#[cfg(feature = "server")]
use crate::db::get_db;
#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Sign in with email and password. The session cookies are set on the
/// response by the auth middleware.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{self, cookies};
    use shared_types::LoginRequest;

    let req = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let user = auth::authenticate(db, &req.email, &req.password)
        .await
        .map_err(|e| {
            tracing::info!(reason = %e, "sign-in rejected");
            e.into_server_fn_error()
        })?;

    let session = auth::issue_session(db, &user)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    cookies::schedule_auth_cookies(&session.access_token, &session.refresh_token);

    tracing::info!(user_id = %user.id, "signed in");
    Ok(user)
}

/// The signed-in user, or `None`.
///
/// A token for an account that no longer exists clears the cookies so the
/// client does not stay half signed-in.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::cookies;
    use crate::repo;

    let Some(claims) = current_claims() else {
        return Ok(None);
    };

    let db = get_db().await;
    let user = repo::user::find_by_id(db, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if user.is_none() {
        tracing::warn!(user_id = %claims.sub, "session references a missing user, clearing cookies");
        cookies::schedule_clear_cookies();
    }
    Ok(user)
}

/// Revoke the caller's refresh tokens and clear the session cookies.
/// Succeeds even without a session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::cookies;
    use crate::repo;

    if let Some(claims) = current_claims() {
        let db = get_db().await;
        match repo::refresh_token::revoke_all(db, claims.sub).await {
            Ok(revoked) => tracing::info!(user_id = %claims.sub, revoked, "signed out"),
            Err(e) => tracing::error!(user_id = %claims.sub, error = %e, "failed to revoke refresh tokens"),
        }
    }

    cookies::schedule_clear_cookies();
    Ok(())
}
