//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod booking;
pub mod config;
pub mod internal;

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::error::{
        auth::AuthError, booking::BookingError, config::ConfigError, internal::InternalError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` and
/// `BookingError` handle their own response mapping, while generic variants provide
/// standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()`; always 401.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Booking admission or lifecycle rejection.
    ///
    /// Delegates to `BookingError::into_response()` for 400/422 mapping.
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Request body failed field validation.
    ///
    /// Results in 400 Bad Request listing the offending fields.
    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    /// Request body was not valid JSON for the expected shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Signing an access token failed.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Hashing a password failed.
    #[error(transparent)]
    PasswordHashErr(#[from] argon2::password_hash::Error),

    /// Listener or socket failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Stored data that cannot be converted into a domain model.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Path parameter is not a valid identifier.
    ///
    /// Results in 400 Bad Request with `invalid ID`.
    ///
    /// # Fields
    /// - The raw value that failed to parse
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// 404 with the generic `resource not found` message.
    pub fn not_found() -> Self {
        Self::NotFound("resource not found".to_string())
    }

    /// 400 with the generic `invalid parameters` message.
    pub fn invalid_params() -> Self {
        Self::BadRequest("invalid parameters".to_string())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `InvalidId`, `Validation` and `JsonRejection`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr` and `BookingErr`, delegated to the domain error
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::InvalidId(value) => {
                tracing::debug!("Rejected malformed id '{}'", value);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "invalid ID".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Validation(errors) => {
                let fields: BTreeMap<String, Vec<String>> = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errs)| {
                        let messages = errs
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            })
                            .collect();
                        (field.to_string(), messages)
                    })
                    .collect();

                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorDto {
                        error: "invalid parameters".to_string(),
                        fields,
                    }),
                )
                    .into_response()
            }
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "invalid parameters".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
