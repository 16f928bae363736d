use axum::http::{header, HeaderMap, HeaderValue};
use cookie::{Cookie, SameSite};
use std::sync::{Arc, Mutex};

use super::jwt;

pub const ACCESS_COOKIE: &str = "exa_access";
pub const REFRESH_COOKIE: &str = "exa_refresh";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty())
}

/// HTTP-only, `SameSite=Lax`, site-wide cookie. A zero `max_age` expires it.
fn session_cookie(name: &'static str, value: &str, max_age_seconds: i64) -> HeaderValue {
    let mut cookie = Cookie::build((name, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_seconds))
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    // JWTs are base64url and the attributes are ASCII, so this cannot fail
    HeaderValue::from_str(&cookie.build().to_string()).expect("session cookie is valid ASCII")
}

pub fn build_access_cookie(token: &str) -> HeaderValue {
    session_cookie(ACCESS_COOKIE, token, jwt::access_token_expiry_minutes() * 60)
}

pub fn build_refresh_cookie(token: &str) -> HeaderValue {
    session_cookie(REFRESH_COOKIE, token, jwt::refresh_token_expiry_days() * 86_400)
}

/// Access token from the session cookie, or from `Authorization: Bearer`
/// for non-browser clients.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, ACCESS_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, REFRESH_COOKIE)
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

pub fn set_auth_cookies(headers: &mut HeaderMap, access_token: &str, refresh_token: &str) {
    headers.append(header::SET_COOKIE, build_access_cookie(access_token));
    headers.append(header::SET_COOKIE, build_refresh_cookie(refresh_token));
}

pub fn clear_auth_cookies(headers: &mut HeaderMap) {
    headers.append(header::SET_COOKIE, session_cookie(ACCESS_COOKIE, "", 0));
    headers.append(header::SET_COOKIE, session_cookie(REFRESH_COOKIE, "", 0));
}

/// Whether `headers` already carry a `Set-Cookie` for either session cookie.
pub fn sets_session_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| {
            v.starts_with(&format!("{ACCESS_COOKIE}="))
                || v.starts_with(&format!("{REFRESH_COOKIE}="))
        })
}

/// Cookie change requested by a server function, applied by the auth
/// middleware once the response exists.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set {
        access_token: String,
        refresh_token: String,
    },
    Clear,
}

/// Per-request slot the middleware inserts into request extensions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut pending) = self.0.lock() {
            *pending = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut pending| pending.take())
    }
}

fn schedule_from_server_fn(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(action);
        }
    }
}

/// Ask the middleware to set session cookies on this response.
pub fn schedule_auth_cookies(access_token: &str, refresh_token: &str) {
    schedule_from_server_fn(PendingCookieAction::Set {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
    });
}

/// Ask the middleware to expire both session cookies on this response.
pub fn schedule_clear_cookies() {
    schedule_from_server_fn(PendingCookieAction::Clear);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(raw: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(raw).unwrap());
        headers
    }

    #[test]
    fn access_cookie_wins_over_bearer() {
        let mut headers = headers_with_cookie("theme=dark; exa_access=from-cookie");
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(extract_access_token(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn bearer_is_used_without_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_access_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn refresh_cookie_is_found_among_others() {
        let headers = headers_with_cookie("a=1; exa_refresh=r-token; b=2");
        assert_eq!(extract_refresh_token(&headers).as_deref(), Some("r-token"));
        assert_eq!(extract_access_token(&headers), None);
    }

    #[test]
    fn built_cookie_is_http_only_and_site_wide() {
        let value = build_access_cookie("tok");
        let text = value.to_str().unwrap();
        assert!(text.starts_with("exa_access=tok"));
        assert!(text.contains("HttpOnly"));
        assert!(text.contains("Path=/"));
        assert!(text.contains("SameSite=Lax"));
    }

    #[test]
    fn clearing_expires_both_cookies() {
        let mut headers = HeaderMap::new();
        clear_auth_cookies(&mut headers);
        let values: Vec<_> = headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| v.contains("Max-Age=0")));
    }

    #[test]
    fn detects_handler_set_session_cookies() {
        let mut headers = HeaderMap::new();
        headers.append(header::SET_COOKIE, HeaderValue::from_static("theme=dark; Path=/"));
        assert!(!sets_session_cookie(&headers));
        clear_auth_cookies(&mut headers);
        assert!(sets_session_cookie(&headers));
    }

    #[test]
    fn slot_hands_out_the_action_once() {
        let slot = CookieSlot::default();
        slot.schedule(PendingCookieAction::Clear);
        assert_eq!(slot.take(), Some(PendingCookieAction::Clear));
        assert_eq!(slot.take(), None);
    }
}
