use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, UpdatedDto, ValidationErrorDto},
        hotel::{CreateHotelDto, HotelDto, UpdateHotelDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::hotel::{CreateHotelParams, HotelField},
        service::hotel::HotelService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// GET /api/v1/hotels - List all hotels with their room ids
#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = "hotels",
    security(("token" = [])),
    responses(
        (status = 200, description = "All hotels", body = Vec<HotelDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
    ),
)]
pub async fn list_hotels(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let hotel_service = HotelService::new(&state.db);
    let hotels: Vec<HotelDto> = hotel_service
        .list()
        .await?
        .into_iter()
        .map(|h| h.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(hotels)))
}

/// GET /api/v1/hotels/{hotel_id} - Get a hotel by id
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "hotels",
    params(("hotel_id" = String, Path, description = "Hotel id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "The hotel", body = HotelDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let hotel_id = parse_id(&hotel_id)?;

    let hotel_service = HotelService::new(&state.db);
    let hotel = hotel_service.get(&hotel_id).await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

/// POST /api/v1/hotels - Create a hotel
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: The created hotel, with no rooms
/// - `400 Bad Request`: Name, location or rating invalid
/// - `401 Unauthorized`: Not an admin
#[utoipa::path(
    post,
    path = "/api/v1/hotels",
    tag = "hotels",
    request_body = CreateHotelDto,
    security(("token" = [])),
    responses(
        (status = 200, description = "Hotel created", body = HotelDto),
        (status = 400, description = "Invalid parameters", body = ValidationErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateHotelDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;
    payload.validate()?;

    let hotel_service = HotelService::new(&state.db);
    let hotel = hotel_service
        .create(CreateHotelParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

/// PATCH /api/v1/hotels/{hotel_id} - Rename or relocate a hotel
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    patch,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "hotels",
    params(("hotel_id" = String, Path, description = "Hotel id")),
    request_body = UpdateHotelDto,
    security(("token" = [])),
    responses(
        (status = 200, description = "Hotel updated", body = UpdatedDto),
        (status = 400, description = "Invalid id or update", body = ValidationErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
    ),
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(hotel_id): Path<String>,
    payload: Result<Json<UpdateHotelDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let hotel_id = parse_id(&hotel_id)?;
    let Json(payload) = payload?;
    let payload = payload.normalized();
    payload.validate()?;

    let hotel_service = HotelService::new(&state.db);
    hotel_service
        .update(&hotel_id, HotelField::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(UpdatedDto { updated: hotel_id })))
}

/// DELETE /api/v1/hotels/{hotel_id} - Delete a hotel with its rooms and bookings
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    delete,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "hotels",
    params(("hotel_id" = String, Path, description = "Hotel id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "Hotel deleted", body = DeletedDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let hotel_id = parse_id(&hotel_id)?;

    let hotel_service = HotelService::new(&state.db);
    hotel_service.delete(&hotel_id).await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted: hotel_id })))
}
