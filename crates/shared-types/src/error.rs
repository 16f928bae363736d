use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Shown for store and internal failures instead of their raw text.
pub const UNAVAILABLE_MESSAGE: &str = "The verification service is unavailable. Please try again.";

/// Shown when a server error carries no readable payload at all.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// What went wrong, coarse enough to pick an HTTP status and a UI reaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    /// A lookup that must hit one row hit none.
    NotFound,
    /// Request fields failed validation; see `field_errors`.
    ValidationError,
    /// The PostgreSQL store failed or could not be reached.
    DatabaseError,
    /// No session, or bad credentials. The client returns to sign-in.
    Unauthorized,
    InternalError,
}

impl AppErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            AppErrorKind::NotFound => 404,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::DatabaseError | AppErrorKind::InternalError => 500,
        }
    }

    /// Whether the error's own message is safe and useful to show a user.
    fn is_user_facing(self) -> bool {
        matches!(
            self,
            AppErrorKind::NotFound | AppErrorKind::ValidationError | AppErrorKind::Unauthorized
        )
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Error shared by server functions, REST handlers and the client.
///
/// Server functions serialize it as JSON into the `ServerFnError` message;
/// the client recovers it with [`AppError::from_server_error`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::ValidationError, message)
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::DatabaseError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Recover the error from a `ServerFnError` string.
    ///
    /// The transport wraps the JSON in prose, so the outermost `{...}` span
    /// is parsed when the whole string is not JSON.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        serde_json::from_str(error_message).ok().or_else(|| {
            let start = error_message.find('{')?;
            let end = error_message.rfind('}')?;
            error_message
                .get(start..=end)
                .and_then(|json| serde_json::from_str(json).ok())
        })
    }

    /// Per-field messages for the sign-in form. Empty when there are none.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Text for an error banner. Store and internal failures never leak
    /// their raw message.
    pub fn friendly_message(error_string: &str) -> String {
        match Self::from_server_error(error_string) {
            Some(e) if e.kind.is_user_facing() => e.message,
            Some(_) => UNAVAILABLE_MESSAGE.to_string(),
            None => GENERIC_MESSAGE.to_string(),
        }
    }

    /// The session is gone and the client should go back to sign-in.
    pub fn is_unauthorized(error_string: &str) -> bool {
        Self::from_server_error(error_string)
            .is_some_and(|e| e.kind == AppErrorKind::Unauthorized)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"));
                Some((field.to_string(), msg))
            })
            .collect();
        AppError::validation("Please correct the highlighted fields", field_errors)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.kind.status_code())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}
