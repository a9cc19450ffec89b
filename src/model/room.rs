use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Room category, serialized by name.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSize {
    Small,
    Normal,
    Large,
    Extra,
}

impl RoomSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Normal => "Normal",
            Self::Large => "Large",
            Self::Extra => "Extra",
        }
    }
}

impl fmt::Display for RoomSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Small" => Ok(Self::Small),
            "Normal" => Ok(Self::Normal),
            "Large" => Ok(Self::Large),
            "Extra" => Ok(Self::Extra),
            other => Err(format!("invalid room size: {}", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct RoomDto {
    pub id: String,
    pub size: RoomSize,
    pub price: f64,
    #[serde(rename = "hotelID")]
    pub hotel_id: String,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct CreateRoomDto {
    pub size: RoomSize,
    #[validate(range(min = 0.0, message = "room price should not be negative"))]
    pub price: f64,
}
