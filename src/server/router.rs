use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{CancelledDto, DeletedDto, ErrorDto, UpdatedDto, ValidationErrorDto},
        auth::{AuthDto, AUTH_HEADER},
        booking::{BookingDto, CreateBookingDto},
        hotel::{CreateHotelDto, HotelDto, UpdateHotelDto},
        room::{CreateRoomDto, RoomDto, RoomSize},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{auth, booking, hotel, room, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "hotel-reserv", description = "Hotel room reservation API"),
    paths(
        auth::login,
        user::register,
        user::create_user,
        user::create_admin,
        user::list_users,
        user::get_me,
        user::get_user,
        user::update_me,
        user::update_user,
        user::delete_user,
        hotel::list_hotels,
        hotel::get_hotel,
        hotel::create_hotel,
        hotel::update_hotel,
        hotel::delete_hotel,
        room::list_hotel_rooms,
        room::get_room,
        room::create_room,
        room::delete_room,
        booking::list_room_bookings,
        booking::list_hotel_bookings,
        booking::list_bookings,
        booking::get_booking,
        booking::create_booking,
        booking::cancel_booking,
        booking::delete_booking,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        UpdatedDto,
        DeletedDto,
        CancelledDto,
        AuthDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        HotelDto,
        CreateHotelDto,
        UpdateHotelDto,
        RoomSize,
        RoomDto,
        CreateRoomDto,
        BookingDto,
        CreateBookingDto,
    )),
    modifiers(&TokenSecurity),
    tags(
        (name = "auth", description = "Login"),
        (name = "users", description = "User accounts"),
        (name = "hotels", description = "Hotels"),
        (name = "rooms", description = "Rooms of a hotel"),
        (name = "bookings", description = "Room bookings"),
    )
)]
pub struct ApiDoc;

/// Registers the `X-Authorization` header as the `token` security scheme.
struct TokenSecurity;

impl Modify for TokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_HEADER))),
            );
        }
    }
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    let v1 = Router::new()
        .route("/users", get(user::list_users).post(user::create_user))
        .route("/users/me", get(user::get_me).patch(user::update_me))
        .route(
            "/users/{user_id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route("/admin/users", post(user::create_admin))
        .route("/hotels", get(hotel::list_hotels).post(hotel::create_hotel))
        .route(
            "/hotels/{hotel_id}",
            get(hotel::get_hotel)
                .patch(hotel::update_hotel)
                .delete(hotel::delete_hotel),
        )
        .route(
            "/hotels/{hotel_id}/rooms",
            get(room::list_hotel_rooms).post(room::create_room),
        )
        .route(
            "/hotels/{hotel_id}/bookings",
            get(booking::list_hotel_bookings),
        )
        .route("/rooms/{room_id}", get(room::get_room).delete(room::delete_room))
        .route(
            "/rooms/{room_id}/bookings",
            get(booking::list_room_bookings).post(booking::create_booking),
        )
        .route("/bookings", get(booking::list_bookings))
        .route(
            "/bookings/{booking_id}",
            get(booking::get_booking)
                .patch(booking::cancel_booking)
                .delete(booking::delete_booking),
        );

    Router::new()
        .route("/api/auth", post(auth::login))
        .route("/api/users", post(user::register))
        .route("/api/openapi.json", get(openapi))
        .nest("/api/v1", v1)
}
