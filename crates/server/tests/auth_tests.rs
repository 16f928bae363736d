//! Integration tests for sign-in, session refresh and sign-out.
//!
//! These tests require a running PostgreSQL database.
//! Run with: `cargo test -p server --features server --test auth_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::{
    create_user, get_with_bearer, get_with_cookie, login, post_json, post_with_cookie, test_app,
    test_pool, unique_email,
};
use shared_types::{AppError, AppErrorKind, AuthUser};

const PASSWORD: &str = "exam-day-2026";

#[tokio::test]
async fn login_sets_both_cookies_and_returns_user() {
    let app = test_app().await;
    let email = unique_email("login");
    let created = create_user(&email, PASSWORD).await;

    let res = login(&app, &email, PASSWORD).await;
    assert_eq!(res.status, StatusCode::OK);

    let user: AuthUser = serde_json::from_str(&res.body).unwrap();
    assert_eq!(user, created);

    let cookies = res.set_cookies();
    assert!(cookies.iter().any(|c| c.starts_with("exa_access=") && c.contains("HttpOnly")));
    assert!(cookies.iter().any(|c| c.starts_with("exa_refresh=") && c.contains("HttpOnly")));
}

#[tokio::test]
async fn email_lookup_ignores_case() {
    let app = test_app().await;
    let email = unique_email("casing");
    create_user(&email, PASSWORD).await;

    let res = login(&app, &email.to_uppercase(), PASSWORD).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let app = test_app().await;
    let email = unique_email("wrongpw");
    create_user(&email, PASSWORD).await;

    let wrong = login(&app, &email, "not-the-password").await;
    let unknown = login(&app, &unique_email("nobody"), PASSWORD).await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    let a: AppError = serde_json::from_str(&wrong.body).unwrap();
    let b: AppError = serde_json::from_str(&unknown.body).unwrap();
    assert_eq!(a.kind, AppErrorKind::Unauthorized);
    assert_eq!(a.message, b.message);
    assert!(wrong.set_cookies().is_empty());
}

#[tokio::test]
async fn malformed_login_is_a_validation_error() {
    let app = test_app().await;
    let res = post_json(
        &app,
        "/api/v1/auth/login",
        &serde_json::json!({ "email": "not-an-email", "password": "short" }),
    )
    .await;

    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&res.body).unwrap();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert!(err.field_errors.contains_key("password"));
}

#[tokio::test]
async fn access_token_works_as_bearer() {
    let app = test_app().await;
    let email = unique_email("bearer");
    create_user(&email, PASSWORD).await;

    let pair = login(&app, &email, PASSWORD).await.cookie_pair("exa_access").unwrap();
    let token = pair.trim_start_matches("exa_access=");

    let res = get_with_bearer(&app, "/api/v1/system-status", token).await;
    assert_eq!(res.status, StatusCode::OK);
}

/// Push every rotation of `user_id` past the reuse grace window.
async fn age_rotations(user_id: uuid::Uuid) {
    let pool = test_pool().await;
    sqlx::query(
        "UPDATE refresh_tokens SET rotated_at = now() - interval '1 hour' \
         WHERE user_id = $1 AND rotated_at IS NOT NULL",
    )
    .bind(user_id)
    .execute(&pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn refresh_cookie_alone_restores_the_session() {
    let app = test_app().await;
    let email = unique_email("rotate");
    let user = create_user(&email, PASSWORD).await;

    let refresh = login(&app, &email, PASSWORD).await.cookie_pair("exa_refresh").unwrap();

    let first = get_with_cookie(&app, "/api/v1/system-status", &refresh).await;
    assert_eq!(first.status, StatusCode::OK);
    let rotated = first.cookie_pair("exa_refresh").expect("rotation sets a new refresh cookie");
    assert_ne!(rotated, refresh);
    assert!(first.cookie_pair("exa_access").is_some());

    // a straggler with the old cookie is still served right after rotation
    let straggler = get_with_cookie(&app, "/api/v1/system-status", &refresh).await;
    assert_eq!(straggler.status, StatusCode::OK);

    // once the grace window has passed the old token is dead
    age_rotations(user.id).await;
    let replay = get_with_cookie(&app, "/api/v1/system-status", &refresh).await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);

    let next = get_with_cookie(&app, "/api/v1/system-status", &rotated).await;
    assert_eq!(next.status, StatusCode::OK);
}

#[tokio::test]
async fn parallel_reads_with_only_a_refresh_cookie_all_succeed() {
    let app = test_app().await;
    let email = unique_email("parallel");
    create_user(&email, PASSWORD).await;

    let refresh = login(&app, &email, PASSWORD).await.cookie_pair("exa_refresh").unwrap();

    // the overview page and the layout fire these together after idling
    let (dashboard, status, again) = tokio::join!(
        get_with_cookie(&app, "/api/v1/dashboard", &refresh),
        get_with_cookie(&app, "/api/v1/system-status", &refresh),
        get_with_cookie(&app, "/api/v1/dashboard", &refresh),
    );

    for res in [&dashboard, &status, &again] {
        assert_eq!(res.status, StatusCode::OK, "body: {}", res.body);
        assert!(res.cookie_pair("exa_access").is_some());
    }
}

#[tokio::test]
async fn signed_out_refresh_cookie_is_refused_inside_grace_window() {
    let app = test_app().await;
    let email = unique_email("grace_logout");
    create_user(&email, PASSWORD).await;

    let refresh = login(&app, &email, PASSWORD).await.cookie_pair("exa_refresh").unwrap();

    let rotated = get_with_cookie(&app, "/api/v1/system-status", &refresh).await;
    let fresh = rotated.cookie_pair("exa_refresh").unwrap();
    let out = post_with_cookie(&app, "/api/v1/auth/logout", &fresh).await;
    assert_eq!(out.status, StatusCode::NO_CONTENT);

    let after = get_with_cookie(&app, "/api/v1/system-status", &refresh).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_cookies_and_revokes_refresh_tokens() {
    let app = test_app().await;
    let email = unique_email("logout");
    create_user(&email, PASSWORD).await;

    let res = login(&app, &email, PASSWORD).await;
    let access = res.cookie_pair("exa_access").unwrap();
    let refresh = res.cookie_pair("exa_refresh").unwrap();

    let out = post_with_cookie(&app, "/api/v1/auth/logout", &format!("{access}; {refresh}")).await;
    assert_eq!(out.status, StatusCode::NO_CONTENT);
    let cleared = out.set_cookies();
    assert_eq!(cleared.len(), 2);
    assert!(cleared.iter().all(|c| c.contains("Max-Age=0")));

    let after = get_with_cookie(&app, "/api/v1/system-status", &refresh).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_with_only_a_refresh_cookie_still_clears() {
    let app = test_app().await;
    let email = unique_email("logout_refresh");
    create_user(&email, PASSWORD).await;

    let refresh = login(&app, &email, PASSWORD).await.cookie_pair("exa_refresh").unwrap();

    let out = post_with_cookie(&app, "/api/v1/auth/logout", &refresh).await;
    assert_eq!(out.status, StatusCode::NO_CONTENT);
    let cookies = out.set_cookies();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}

#[tokio::test]
async fn logout_without_session_is_harmless() {
    let app = test_app().await;
    let out = post_with_cookie(&app, "/api/v1/auth/logout", "theme=dark").await;
    assert_eq!(out.status, StatusCode::NO_CONTENT);
}
