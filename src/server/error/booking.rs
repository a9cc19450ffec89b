use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain rejections from booking admission and the booking lifecycle.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// The requested range overlaps an active booking of the room.
    #[error("Room {room_id} is already booked for the requested dates")]
    UnavailableDate { room_id: String },

    /// The booking's start date is not strictly in the future.
    #[error("Booking {booking_id} has already started and cannot be cancelled")]
    CancelPastBooking { booking_id: String },

    /// `from_date` is after `to_date`, or the whole range lies in the past.
    #[error("Invalid booking date range")]
    InvalidDateRange,
}

/// Converts booking rejections into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidDateRange`
/// - 422 Unprocessable Entity - For `UnavailableDate` and `CancelPastBooking`
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::UnavailableDate { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "unavailable date"),
            Self::CancelPastBooking { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "cannot cancel a booking that has already started",
            ),
            Self::InvalidDateRange => (StatusCode::BAD_REQUEST, "invalid date range"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
