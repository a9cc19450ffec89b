use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when request validation fails.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ValidationErrorDto {
    pub error: String,
    /// Field name to the messages describing why it was rejected.
    pub fields: BTreeMap<String, Vec<String>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct UpdatedDto {
    pub updated: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct DeletedDto {
    pub deleted: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct CancelledDto {
    pub cancelled: String,
}
