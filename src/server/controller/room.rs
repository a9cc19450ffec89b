use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, ValidationErrorDto},
        room::{CreateRoomDto, RoomDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room::CreateRoomParams,
        service::room::RoomService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// GET /api/v1/hotels/{hotel_id}/rooms - List the rooms of a hotel
///
/// # Returns
/// - `200 OK`: Rooms of the hotel, possibly empty
/// - `400 Bad Request`: `hotel_id` is not a valid id
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No such hotel
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}/rooms",
    tag = "rooms",
    params(("hotel_id" = String, Path, description = "Hotel id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "Rooms of the hotel", body = Vec<RoomDto>),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
    ),
)]
pub async fn list_hotel_rooms(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let hotel_id = parse_id(&hotel_id)?;

    let room_service = RoomService::new(&state.db);
    let rooms: Vec<RoomDto> = room_service
        .list_by_hotel(&hotel_id)
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(rooms)))
}

/// GET /api/v1/rooms/{room_id} - Get a room by id
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}",
    tag = "rooms",
    params(("room_id" = String, Path, description = "Room id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let room_id = parse_id(&room_id)?;

    let room_service = RoomService::new(&state.db);
    let room = room_service.get(&room_id).await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// POST /api/v1/hotels/{hotel_id}/rooms - Add a room to a hotel
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    post,
    path = "/api/v1/hotels/{hotel_id}/rooms",
    tag = "rooms",
    params(("hotel_id" = String, Path, description = "Hotel id")),
    request_body = CreateRoomDto,
    security(("token" = [])),
    responses(
        (status = 200, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid id or parameters", body = ValidationErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(hotel_id): Path<String>,
    payload: Result<Json<CreateRoomDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let hotel_id = parse_id(&hotel_id)?;
    let Json(payload) = payload?;
    payload.validate()?;

    let room_service = RoomService::new(&state.db);
    let room = room_service
        .create(CreateRoomParams::from_dto(hotel_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// DELETE /api/v1/rooms/{room_id} - Delete a room and its bookings
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{room_id}",
    tag = "rooms",
    params(("room_id" = String, Path, description = "Room id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "Room deleted", body = DeletedDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let room_id = parse_id(&room_id)?;

    let room_service = RoomService::new(&state.db);
    room_service.delete(&room_id).await?;
    state.room_locks.forget(&room_id);

    Ok((StatusCode::OK, Json(DeletedDto { deleted: room_id })))
}
