use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hotel::HotelRepository, room::RoomRepository},
    error::AppError,
    model::room::{CreateRoomParams, Room},
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a room to an existing hotel.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The hotel does not exist
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        if HotelRepository::new(self.db)
            .find_by_id(&params.hotel_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found());
        }

        let room = RoomRepository::new(self.db).create(params).await?;

        tracing::info!("Created room {} in hotel {}", room.id, room.hotel_id);

        Ok(room)
    }

    pub async fn get(&self, id: &str) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::not_found)
    }

    /// Lists the rooms of an existing hotel.
    pub async fn list_by_hotel(&self, hotel_id: &str) -> Result<Vec<Room>, AppError> {
        if HotelRepository::new(self.db)
            .find_by_id(hotel_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found());
        }

        RoomRepository::new(self.db).find_by_hotel(hotel_id).await
    }

    /// Deletes a room and its bookings. Deleting a missing id succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        RoomRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted room {}", id);

        Ok(())
    }
}
