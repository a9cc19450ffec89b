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
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Validates a create payload and stores the user with the given role.
async fn create_with_role(
    state: &AppState,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
    is_admin: bool,
) -> Result<UserDto, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user_service = UserService::new(&state.db);
    let user = user_service
        .create(CreateUserParams::from_dto(payload), is_admin)
        .await?;

    Ok(user.into_dto())
}

/// Validates an update payload and applies it to `user_id`.
async fn update_by_id(
    state: &AppState,
    user_id: &str,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<(), AppError> {
    let Json(payload) = payload?;
    let payload = payload.normalized();
    payload.validate()?;

    let user_service = UserService::new(&state.db);
    user_service
        .update(user_id, UpdateUserParams::from_dto(payload))
        .await
}

/// POST /api/users - Register a new regular user
///
/// Public endpoint, no token required.
///
/// # Returns
/// - `200 OK`: The created user
/// - `400 Bad Request`: Invalid fields or email already in use
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = UserDto),
        (status = 400, description = "Invalid parameters", body = ValidationErrorDto),
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = create_with_role(&state, payload, false).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// POST /api/v1/users - Create a regular user
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = CreateUserDto,
    security(("token" = [])),
    responses(
        (status = 200, description = "User created", body = UserDto),
        (status = 400, description = "Invalid parameters", body = ValidationErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = create_with_role(&state, payload, false).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// POST /api/v1/admin/users - Create an admin user
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    post,
    path = "/api/v1/admin/users",
    tag = "users",
    request_body = CreateUserDto,
    security(("token" = [])),
    responses(
        (status = 200, description = "Admin created", body = UserDto),
        (status = 400, description = "Invalid parameters", body = ValidationErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = create_with_role(&state, payload, true).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// GET /api/v1/users - List all users
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    security(("token" = [])),
    responses(
        (status = 200, description = "All users ordered by email", body = Vec<UserDto>),
        (status = 401, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user_service = UserService::new(&state.db);
    let users: Vec<UserDto> = user_service
        .list()
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// GET /api/v1/users/me - Get the authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "users",
    security(("token" = [])),
    responses(
        (status = 200, description = "The caller", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let user_service = UserService::new(&state.db);
    let user = user_service.get(&identity.user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/v1/users/{user_id} - Get a user by id
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: The user
/// - `400 Bad Request`: `user_id` is not a valid id
/// - `401 Unauthorized`: Not an admin
/// - `404 Not Found`: No such user
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let user_id = parse_id(&user_id)?;

    let user_service = UserService::new(&state.db);
    let user = user_service.get(&user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PATCH /api/v1/users/me - Update the authenticated user
///
/// Only the fields present in the body are changed. A new password is re-hashed.
#[utoipa::path(
    patch,
    path = "/api/v1/users/me",
    tag = "users",
    request_body = UpdateUserDto,
    security(("token" = [])),
    responses(
        (status = 200, description = "User updated", body = UpdatedDto),
        (status = 400, description = "Invalid or empty update", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    update_by_id(&state, &identity.user_id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(UpdatedDto {
            updated: identity.user_id,
        }),
    ))
}

/// PATCH /api/v1/users/{user_id} - Update any user
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    patch,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User id")),
    request_body = UpdateUserDto,
    security(("token" = [])),
    responses(
        (status = 200, description = "User updated", body = UpdatedDto),
        (status = 400, description = "Invalid id or update", body = ValidationErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let user_id = parse_id(&user_id)?;

    update_by_id(&state, &user_id, payload).await?;

    Ok((StatusCode::OK, Json(UpdatedDto { updated: user_id })))
}

/// DELETE /api/v1/users/{user_id} - Delete a user and their bookings
///
/// Deleting a user that does not exist succeeds.
///
/// # Authentication
/// Requires admin permission
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User id")),
    security(("token" = [])),
    responses(
        (status = 200, description = "User deleted", body = DeletedDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    let user_id = parse_id(&user_id)?;

    let user_service = UserService::new(&state.db);
    user_service.delete(&user_id).await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted: user_id })))
}
