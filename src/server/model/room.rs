//! Room domain models and parameters.

use crate::{
    model::room::{CreateRoomDto, RoomDto, RoomSize},
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub hotel_id: String,
    pub size: RoomSize,
    pub price: f64,
}

impl Room {
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            size: self.size,
            price: self.price,
            hotel_id: self.hotel_id,
        }
    }

    /// Converts an entity model to a room domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Room)` - The converted room
    /// - `Err(AppError::Internal(InvalidRoomSize))` - The stored size is not a known name
    pub fn from_entity(entity: entity::room::Model) -> Result<Self, AppError> {
        let size = entity
            .size
            .parse::<RoomSize>()
            .map_err(|_| InternalError::InvalidRoomSize {
                room_id: entity.id.clone(),
                value: entity.size.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            size,
            price: entity.price,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub hotel_id: String,
    pub size: RoomSize,
    pub price: f64,
}

impl CreateRoomParams {
    pub fn from_dto(hotel_id: String, dto: CreateRoomDto) -> Self {
        Self {
            hotel_id,
            size: dto.size,
            price: dto.price,
        }
    }
}
