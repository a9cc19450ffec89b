//! Hotel fixtures for creating in-memory test data.

use entity::hotel;

pub const DEFAULT_ID: &str = "00000000-0000-4000-8000-000000000010";
pub const DEFAULT_NAME: &str = "Bellucia";
pub const DEFAULT_LOCATION: &str = "France";
pub const DEFAULT_RATING: i32 = 3;

/// Creates a hotel entity model with default values.
pub fn entity() -> hotel::Model {
    hotel::Model {
        id: DEFAULT_ID.to_string(),
        name: DEFAULT_NAME.to_string(),
        location: DEFAULT_LOCATION.to_string(),
        rating: DEFAULT_RATING,
    }
}

/// Creates a hotel entity builder for customization.
pub fn entity_builder() -> HotelEntityBuilder {
    HotelEntityBuilder { entity: entity() }
}

/// Builder for hotel entity models with custom values.
pub struct HotelEntityBuilder {
    entity: hotel::Model,
}

impl HotelEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.entity.location = location.into();
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.entity.rating = rating;
        self
    }

    pub fn build(self) -> hotel::Model {
        self.entity
    }
}
