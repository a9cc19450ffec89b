use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name of the header carrying the access token, both on login responses and on requests.
pub const AUTH_HEADER: &str = "X-Authorization";

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AuthDto {
    pub email: String,
    pub password: String,
}
