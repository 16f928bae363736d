use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Map a store error onto the shared error model.
///
/// Connection problems are reported separately from query failures so the
/// client can tell "store unreachable" from "bad request".
pub fn sqlx_to_app_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            AppError::database("Data store unavailable")
        }
        _ => AppError::database(err.to_string()),
    }
}

/// Wrap an `AppError` as JSON inside a `ServerFnError` so the client can
/// parse it back with `AppError::from_server_error`.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        sqlx_to_app_error(self)
    }
}

pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Run `validator` rules on a request DTO, returning a `ValidationError`
/// with per-field messages on failure.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, LoginRequest};

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = sqlx::Error::RowNotFound.into_app_error();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }

    #[test]
    fn pool_timeout_maps_to_unavailable() {
        let err = sqlx::Error::PoolTimedOut.into_app_error();
        assert_eq!(err.kind, AppErrorKind::DatabaseError);
        assert_eq!(err.message, "Data store unavailable");
    }

    #[test]
    fn server_fn_error_round_trips_the_app_error() {
        let original = AppError::unauthorized("Invalid email or password");
        let wrapped = original.clone().into_server_fn_error().to_string();
        assert_eq!(AppError::from_server_error(&wrapped), Some(original));
    }

    #[test]
    fn invalid_login_request_reports_fields() {
        let req = LoginRequest {
            email: "not-an-email".into(),
            password: "short".into(),
        };
        let err = req.validate_request().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));
    }

    #[test]
    fn valid_login_request_passes() {
        let req = LoginRequest {
            email: "demo@exasecure.ai".into(),
            password: "exasecure-demo".into(),
        };
        assert!(req.validate_request().is_ok());
    }
}
