//! JSON mirror of the dashboard reads for non-browser clients.
//!
//! Uses the same cookies as the web app, or `Authorization: Bearer <access>`.

pub mod dashboard;
pub mod session;

use axum::{
    routing::{get, post},
    Router,
};

use crate::db::AppState;

pub use dashboard::*;
pub use session::*;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/login", post(session::login))
        .route("/api/v1/auth/logout", post(session::logout))
        .route("/api/v1/dashboard", get(dashboard::get_dashboard))
        .route("/api/v1/system-status", get(dashboard::get_system_status))
}
