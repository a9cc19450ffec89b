//! Room factory for creating test room entities.

use crate::factory::helpers::new_uuid;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::room::Model,
}

impl<'a> RoomFactory<'a> {
    /// Creates a factory for a room in the given hotel.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `hotel_id` - Hotel this room belongs to
    pub fn new(db: &'a DatabaseConnection, hotel_id: impl Into<String>) -> Self {
        let entity = fixture::room::entity_builder()
            .id(new_uuid())
            .hotel_id(hotel_id)
            .build();

        Self { db, entity }
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.entity.size = size.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            hotel_id: ActiveValue::Set(self.entity.hotel_id),
            size: ActiveValue::Set(self.entity.size),
            price: ActiveValue::Set(self.entity.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values in the given hotel.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: impl Into<String>,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}
