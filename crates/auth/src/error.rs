//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use devlink_common::Error;
use serde_json::json;

/// Authentication error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header, or one without the `Bearer` prefix
    #[error("No token, authorization denied")]
    MissingToken,

    /// Bad signature, wrong secret, malformed encoding, or expired
    #[error("Token not valid")]
    InvalidToken,

    /// Authenticated caller does not own the resource
    #[error("User not authorized")]
    NotAuthorized,

    /// Signing secret unavailable at issuance
    #[error("Token signing failed")]
    Signing,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::NotAuthorized => StatusCode::BAD_REQUEST,
            AuthError::Signing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "MISSING_TOKEN",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::NotAuthorized => "NOT_AUTHORIZED",
            AuthError::Signing => "SIGNING_ERROR",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Token signing failed");
            "Server Error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "msg": message,
            "code": self.error_code(),
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken | AuthError::InvalidToken => {
                Error::Authentication(err.to_string())
            }
            AuthError::NotAuthorized => Error::NotAuthorized(err.to_string()),
            AuthError::Signing => Error::Internal(err.to_string()),
        }
    }
}
