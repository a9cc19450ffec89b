use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::room::{CreateRoomParams, Room},
};

/// Repository for room records.
///
/// Returns `AppError` rather than `DbErr` since stored sizes are parsed on the way out.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        let entity = entity::room::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            hotel_id: ActiveValue::Set(params.hotel_id),
            size: ActiveValue::Set(params.size.as_str().to_string()),
            price: ActiveValue::Set(params.price),
        }
        .insert(self.db)
        .await?;

        Room::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Room>, AppError> {
        entity::prelude::Room::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Room::from_entity)
            .transpose()
    }

    pub async fn find_by_hotel(&self, hotel_id: &str) -> Result<Vec<Room>, AppError> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Room::from_entity)
            .collect()
    }

    /// Deletes a room and its bookings. Deleting a missing id is not an error.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::RoomId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Room::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
