use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BookingDto {
    pub id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "hotelID")]
    pub hotel_id: String,
    #[serde(rename = "roomID")]
    pub room_id: String,
    #[serde(rename = "fromDate")]
    pub from_date: DateTime<Utc>,
    #[serde(rename = "toDate")]
    pub to_date: DateTime<Utc>,
    #[serde(rename = "createdDate")]
    pub created_date: DateTime<Utc>,
    pub cancelled: bool,
    #[serde(rename = "cancelledAt")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Requested stay, both ends inclusive, as ISO-8601 timestamps.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateBookingDto {
    #[serde(rename = "fromDate")]
    pub from_date: DateTime<Utc>,
    #[serde(rename = "toDate")]
    pub to_date: DateTime<Utc>,
}
