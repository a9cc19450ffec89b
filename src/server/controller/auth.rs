use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthDto, AUTH_HEADER},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// POST /api/auth - Exchange credentials for an access token
///
/// The token is returned in the `X-Authorization` response header and must be sent back in
/// the same header on every `/api/v1` request.
///
/// # Returns
/// - `204 No Content`: Credentials accepted, token in the `X-Authorization` header
/// - `400 Bad Request`: Body is not valid JSON
/// - `401 Unauthorized`: Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "auth",
    request_body = AuthDto,
    responses(
        (status = 204, description = "Token issued in the X-Authorization header"),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<AuthDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let auth_service = AuthService::new(&state.db, &state.tokens);
    let token = auth_service.login(&payload.email, &payload.password).await?;

    Ok((StatusCode::NO_CONTENT, [(AUTH_HEADER, token)]))
}
