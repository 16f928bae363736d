//! Integration tests for the REST dashboard reads.
//!
//! These tests require a running PostgreSQL database.
//! Run with: `cargo test -p server --features server --test api_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{create_user, get, get_with_bearer, get_with_cookie, login, test_app, test_pool, unique_email};
use server::repo;
use shared_types::{AppError, AppErrorKind, DashboardSnapshot, SystemStatus, VerificationStatus};

const PASSWORD: &str = "correct-horse-battery";

/// Sign a fresh user in and return their access cookie pair.
async fn signed_in_cookie(app: &axum::Router) -> String {
    let email = unique_email("dash");
    create_user(&email, PASSWORD).await;
    login(app, &email, PASSWORD)
        .await
        .cookie_pair("exa_access")
        .expect("login sets the access cookie")
}

#[tokio::test]
async fn health_check_reports_connected_store() {
    let app = test_app().await;
    let res = get(&app, "/health").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("\"status\":\"ok\""));
    assert!(res.body.contains("\"db\":\"connected\""));
}

#[tokio::test]
async fn docs_page_is_served() {
    let app = test_app().await;
    let res = get(&app, "/docs").await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn dashboard_requires_a_session() {
    let app = test_app().await;
    let res = get(&app, "/api/v1/dashboard").await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    let err: AppError = serde_json::from_str(&res.body).unwrap();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn garbage_bearer_token_is_rejected() {
    let app = test_app().await;
    let res = get_with_bearer(&app, "/api/v1/dashboard", "not.a.jwt").await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_summarizes_stored_rows() {
    let pool = test_pool().await;
    let app = test_app().await;

    repo::exam::insert(&pool, "Entrance A", "active").await.unwrap();
    repo::exam::insert(&pool, "Entrance B", "completed").await.unwrap();
    repo::fraud_flag::insert(&pool, "impersonation", "high", "face mismatch")
        .await
        .unwrap();

    let now = Utc::now();
    for (i, status) in ["verified", "failed", "escalated"].iter().enumerate() {
        let code = format!("API-{}-{i}", now.timestamp_nanos_opt().unwrap_or_default());
        repo::verification::insert(
            &pool,
            &repo::verification::NewVerification {
                candidate_name: "Asha Rao",
                verification_type: "Biometric",
                confidence_score: 91.0,
                status,
                verification_code: &code,
                created_at: now - Duration::minutes(i as i64),
            },
        )
        .await
        .unwrap();
    }

    let cookie = signed_in_cookie(&app).await;
    let res = get_with_cookie(&app, "/api/v1/dashboard", &cookie).await;
    assert_eq!(res.status, StatusCode::OK);

    let snapshot: DashboardSnapshot = serde_json::from_str(&res.body).unwrap();
    assert!(snapshot.summary.total_exams >= 2);
    assert!(snapshot.summary.active_exams >= 1);
    assert!(snapshot.summary.active_exams <= snapshot.summary.total_exams);
    assert!(snapshot.summary.fraud_detected >= 1);
    assert!((0.0..=100.0).contains(&snapshot.summary.verification_rate));

    let recent = &snapshot.recent_verifications;
    assert!(!recent.is_empty() && recent.len() <= 10);
    assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert!(recent
        .iter()
        .any(|v| v.status == VerificationStatus::Other("escalated".to_string())));
}

#[tokio::test]
async fn system_status_defaults_to_operational() {
    let app = test_app().await;
    let cookie = signed_in_cookie(&app).await;

    let res = get_with_cookie(&app, "/api/v1/system-status", &cookie).await;
    assert_eq!(res.status, StatusCode::OK);
    let status: SystemStatus = serde_json::from_str(&res.body).unwrap();
    assert_eq!(status, SystemStatus::Operational);
}

#[tokio::test]
async fn system_status_requires_a_session() {
    let app = test_app().await;
    let res = get(&app, "/api/v1/system-status").await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}
