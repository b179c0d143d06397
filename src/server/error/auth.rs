use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message shared by every credential failure so responses never reveal
/// whether an email is registered.
const CREDENTIALS_INCORRECT: &str = "Email or password is incorrect";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, format or expiry validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// Authenticated user lacks the role required by the endpoint.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Description of the check that failed, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login attempted with an email no live user has.
    #[error("No user with email {0}")]
    EmailNotExist(String),

    /// Login attempted with the wrong password for an existing user.
    #[error("Incorrect password for user {0}")]
    PasswordIncorrect(i32),

    /// Password exceeds the number of bytes the hasher accepts.
    #[error("Password exceeds {max} bytes")]
    PasswordTooLong {
        /// Maximum accepted password length in bytes
        max: usize,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `EmailNotExist` / `PasswordIncorrect` → 401 Unauthorized with one shared message
/// - `AccessDenied` → 403 Forbidden
/// - `PasswordTooLong` → 400 Bad Request
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required".to_string()),
            Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired access token".to_string(),
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action".to_string(),
            ),
            Self::EmailNotExist(_) | Self::PasswordIncorrect(_) => {
                (StatusCode::UNAUTHORIZED, CREDENTIALS_INCORRECT.to_string())
            }
            Self::PasswordTooLong { max } => (
                StatusCode::BAD_REQUEST,
                format!("Password must be at most {} bytes", max),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
