//! Booking endpoints.
//!
//! Every handler authenticates first, then parses path ids, then reads the body. Admission,
//! cancellation and visibility rules live in `BookingService`; handlers only resolve the room
//! a new booking belongs to and convert the result to DTOs.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CancelledDto, DeletedDto, ErrorDto},
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        data::booking::BookingRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::{Booking, CreateBookingParams},
        service::{booking::BookingService, room::RoomService},
        state::AppState,
        util::parse::parse_id,
    },
};

fn into_dtos(bookings: Vec<Booking>) -> Vec<BookingDto> {
    bookings.into_iter().map(|b| b.into_dto()).collect()
}

/// GET /api/v1/rooms/{room_id}/bookings - List bookings of a room
///
/// Admins see every booking of the room, other users only their own.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/bookings",
    tag = "bookings",
    params(("room_id" = String, Path, description = "Room id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "Bookings of the room visible to the caller", body = Vec<BookingDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
    ),
)]
pub async fn list_room_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let room_id = parse_id(&room_id)?;

    let repo = BookingRepository::new(&state.db);
    let bookings = BookingService::new(&repo, &state.room_locks)
        .list_by_room(&identity, &room_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}

/// GET /api/v1/hotels/{hotel_id}/bookings - List bookings of a hotel
///
/// Admins see every booking of the hotel, other users only their own.
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}/bookings",
    tag = "bookings",
    params(("hotel_id" = String, Path, description = "Hotel id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "Bookings of the hotel visible to the caller", body = Vec<BookingDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
    ),
)]
pub async fn list_hotel_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let hotel_id = parse_id(&hotel_id)?;

    let repo = BookingRepository::new(&state.db);
    let bookings = BookingService::new(&repo, &state.room_locks)
        .list_by_hotel(&identity, &hotel_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}

/// GET /api/v1/bookings - List bookings
///
/// Admins see every booking, other users only their own.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "bookings",
    security(("token" = [])),
    responses(
        (status = 200, description = "Bookings visible to the caller", body = Vec<BookingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
    ),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let repo = BookingRepository::new(&state.db);
    let bookings = BookingService::new(&repo, &state.room_locks)
        .list_all(&identity)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}

/// GET /api/v1/bookings/{booking_id} - Get a booking
///
/// # Returns
/// - `200 OK`: The booking
/// - `400 Bad Request`: `booking_id` is not a valid id
/// - `401 Unauthorized`: Missing token, or the booking belongs to another user
/// - `404 Not Found`: No such booking
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}",
    tag = "bookings",
    params(("booking_id" = String, Path, description = "Booking id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Not the owner or an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let booking_id = parse_id(&booking_id)?;

    let repo = BookingRepository::new(&state.db);
    let booking = BookingService::new(&repo, &state.room_locks)
        .get(&identity, &booking_id)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// POST /api/v1/rooms/{room_id}/bookings - Book a room
///
/// The booking's hotel is taken from the room. The date range is inclusive at both ends and
/// may not overlap any active booking of the room.
///
/// # Returns
/// - `200 OK`: The created booking
/// - `400 Bad Request`: Invalid id, malformed body, `fromDate` after `toDate`, or a range
///   entirely in the past
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No such room
/// - `422 Unprocessable Entity`: The range overlaps an active booking
#[utoipa::path(
    post,
    path = "/api/v1/rooms/{room_id}/bookings",
    tag = "bookings",
    params(("room_id" = String, Path, description = "Room id")),
    request_body = CreateBookingDto,
    security(("token" = [])),
    responses(
        (status = 200, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid id or date range", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 422, description = "Unavailable date", body = ErrorDto),
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<String>,
    payload: Result<Json<CreateBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let room_id = parse_id(&room_id)?;
    let Json(payload) = payload?;

    let room = RoomService::new(&state.db).get(&room_id).await?;
    let params = CreateBookingParams::from_dto(room.id, room.hotel_id, payload)?;

    let repo = BookingRepository::new(&state.db);
    let booking = BookingService::new(&repo, &state.room_locks)
        .create(&identity, params)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// PATCH /api/v1/bookings/{booking_id} - Cancel a booking
///
/// Only bookings that have not started can be cancelled, by their owner or an admin.
#[utoipa::path(
    patch,
    path = "/api/v1/bookings/{booking_id}",
    tag = "bookings",
    params(("booking_id" = String, Path, description = "Booking id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "Booking cancelled", body = CancelledDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Not the owner or an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 422, description = "Booking already started", body = ErrorDto),
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let booking_id = parse_id(&booking_id)?;

    let repo = BookingRepository::new(&state.db);
    let booking = BookingService::new(&repo, &state.room_locks)
        .cancel(&identity, &booking_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CancelledDto {
            cancelled: booking.id,
        }),
    ))
}

/// DELETE /api/v1/bookings/{booking_id} - Remove a booking record
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{booking_id}",
    tag = "bookings",
    params(("booking_id" = String, Path, description = "Booking id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "Booking deleted", body = DeletedDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let booking_id = parse_id(&booking_id)?;

    let repo = BookingRepository::new(&state.db);
    BookingService::new(&repo, &state.room_locks)
        .delete(&booking_id)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted: booking_id })))
}
