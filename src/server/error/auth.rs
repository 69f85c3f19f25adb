use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login attempt with an unknown username or a wrong password.
    ///
    /// Deliberately does not distinguish between the two cases. Results in a
    /// 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Registration attempt with a username that is already taken.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Username already exists")]
    UsernameTaken,

    /// No authenticated user id stored in the session.
    ///
    /// The request reached a protected endpoint without logging in first, or
    /// the session has expired. Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer resolves.
    ///
    /// The user row was removed after the session was issued. Results in a
    /// 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages:
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid username or password"
/// - `UsernameTaken` → 400 Bad Request with "Username already exists"
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Authentication required"
/// - `AccessDenied` → 403 Forbidden with "Operation not permitted"
///
/// Session and role failures are logged at debug level for diagnostics while
/// keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::UsernameTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Username already exists".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("User {} denied access: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Operation not permitted".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
