//! Hotel domain models and parameters.

use crate::model::hotel::{CreateHotelDto, HotelDto, UpdateHotelDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: i32,
    /// Ids of the hotel's rooms.
    pub rooms: Vec<String>,
}

impl Hotel {
    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            location: self.location,
            rooms: self.rooms,
            rating: self.rating,
        }
    }

    /// Converts a hotel row and its room rows into the domain model.
    pub fn from_entity(entity: entity::hotel::Model, rooms: Vec<entity::room::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            rating: entity.rating,
            rooms: rooms.into_iter().map(|room| room.id).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateHotelParams {
    pub name: String,
    pub location: String,
    pub rating: i32,
}

impl CreateHotelParams {
    pub fn from_dto(dto: CreateHotelDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            rating: dto.rating,
        }
    }
}

/// A single mutable hotel column.
#[derive(Debug, Clone, PartialEq)]
pub enum HotelField {
    Name(String),
    Location(String),
}

impl HotelField {
    /// Collects the fields present in an update request.
    pub fn from_dto(dto: UpdateHotelDto) -> Vec<Self> {
        let mut fields = Vec::new();
        if let Some(name) = dto.name {
            fields.push(Self::Name(name));
        }
        if let Some(location) = dto.location {
            fields.push(Self::Location(location));
        }
        fields
    }
}
