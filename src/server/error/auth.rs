use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request reached a protected route without an `X-Authorization` header.
    #[error("Missing access token")]
    MissingToken,

    /// Token failed signature or structural validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// Token was valid but its expiry has passed.
    #[error("Access token expired")]
    ExpiredToken,

    /// Token subject refers to a user that no longer exists.
    #[error("User {0} not found in database")]
    UserNotInDatabase(String),

    /// User lacks the permission or ownership required for the operation.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of what was attempted
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// Login with an unknown email or wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized. Login failures say `invalid credentials`, all
/// other failures say `unauthorized`. The specific reason is only logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "invalid credentials",
            _ => "unauthorized",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
