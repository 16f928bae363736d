use dioxus::prelude::*;
use shared_types::{
    ExamRecord, FraudFlagRecord, ProfileRecord, SystemStatusRecord, VerificationRecord,
};

#[cfg(feature = "server")]
use super::guard::require_auth;
#[cfg(feature = "server")]
use crate::db::get_db;
#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;
#[cfg(feature = "server")]
use crate::repo;

/// Status of every exam.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_exam_statuses() -> Result<Vec<ExamRecord>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    repo::exam::list_statuses(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// One row per fraud-detection record.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_fraud_flags() -> Result<Vec<FraudFlagRecord>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    repo::fraud_flag::list_ids(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Up to ten verifications, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_recent_verifications() -> Result<Vec<VerificationRecord>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    repo::verification::list_recent(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// The caller's profile row, if one exists.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_my_profile() -> Result<Option<ProfileRecord>, ServerFnError> {
    let claims = require_auth()?;
    let db = get_db().await;
    repo::profile::find_by_user(db, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// The global status row, if one exists.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_system_status() -> Result<Option<SystemStatusRecord>, ServerFnError> {
    require_auth()?;
    let db = get_db().await;
    repo::system_status::current(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}
