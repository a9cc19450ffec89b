use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct HotelDto {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Ids of the rooms belonging to this hotel.
    pub rooms: Vec<String>,
    pub rating: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct CreateHotelDto {
    #[validate(length(min = 3, message = "hotel name should be at least 3 characters"))]
    pub name: String,
    #[validate(length(min = 4, message = "hotel location should be at least 4 characters"))]
    pub location: String,
    #[validate(range(min = 0, message = "hotel rating should not be negative"))]
    pub rating: i32,
}

/// Partial hotel update. Only name and location can change.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, Default)]
pub struct UpdateHotelDto {
    #[validate(length(min = 3, message = "hotel name should be at least 3 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 4, message = "hotel location should be at least 4 characters"))]
    pub location: Option<String>,
}

impl UpdateHotelDto {
    /// Treats empty strings the same as omitted fields.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|v| !v.is_empty()),
            location: self.location.filter(|v| !v.is_empty()),
        }
    }
}
