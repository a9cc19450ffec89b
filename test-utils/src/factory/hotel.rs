//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::{new_uuid, next_id};
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::hotel::Model,
}

impl<'a> HotelFactory<'a> {
    /// Creates a factory with fixture defaults, a fresh id and a numbered name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::hotel::entity_builder()
            .id(new_uuid())
            .name(format!("Hotel {}", next_id()))
            .build();

        Self { db, entity }
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

    /// Builds and inserts the hotel entity into the database.
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            location: ActiveValue::Set(self.entity.location),
            rating: ActiveValue::Set(self.entity.rating),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
