//! Room fixtures for creating in-memory test data.

use entity::room;

pub const DEFAULT_ID: &str = "00000000-0000-4000-8000-000000000100";
pub const DEFAULT_SIZE: &str = "Normal";
pub const DEFAULT_PRICE: f64 = 149.99;

/// Creates a room entity model belonging to the default fixture hotel.
pub fn entity() -> room::Model {
    room::Model {
        id: DEFAULT_ID.to_string(),
        hotel_id: super::hotel::DEFAULT_ID.to_string(),
        size: DEFAULT_SIZE.to_string(),
        price: DEFAULT_PRICE,
    }
}

/// Creates a room entity builder for customization.
pub fn entity_builder() -> RoomEntityBuilder {
    RoomEntityBuilder { entity: entity() }
}

/// Builder for room entity models with custom values.
pub struct RoomEntityBuilder {
    entity: room::Model,
}

impl RoomEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    pub fn hotel_id(mut self, hotel_id: impl Into<String>) -> Self {
        self.entity.hotel_id = hotel_id.into();
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.entity.size = size.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    pub fn build(self) -> room::Model {
        self.entity
    }
}
