use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a resource id taken from a request path.
///
/// Ids are UUIDs. The returned string is the canonical lowercase hyphenated form, which is
/// how ids are stored.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(String)` - Canonical id
/// - `Err(AppError::InvalidId)` - The value is not a UUID
pub fn parse_id(value: &str) -> Result<String, AppError> {
    Uuid::parse_str(value)
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| AppError::InvalidId(value.to_string()))
}
