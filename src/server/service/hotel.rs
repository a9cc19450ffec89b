use sea_orm::DatabaseConnection;

use crate::server::{
    data::hotel::HotelRepository,
    error::AppError,
    model::hotel::{CreateHotelParams, Hotel, HotelField},
};

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, AppError> {
        let hotel = HotelRepository::new(self.db).create(params).await?;

        tracing::info!("Created hotel {} ({})", hotel.id, hotel.name);

        Ok(hotel)
    }

    pub async fn get(&self, id: &str) -> Result<Hotel, AppError> {
        HotelRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::not_found)
    }

    pub async fn list(&self) -> Result<Vec<Hotel>, AppError> {
        Ok(HotelRepository::new(self.db).find_all().await?)
    }

    /// Updates name and/or location.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `fields` is empty
    /// - `Err(AppError::NotFound)` - No hotel with that id
    pub async fn update(&self, id: &str, fields: Vec<HotelField>) -> Result<(), AppError> {
        if fields.is_empty() {
            return Err(AppError::invalid_params());
        }

        if !HotelRepository::new(self.db).update(id, fields).await? {
            return Err(AppError::not_found());
        }

        Ok(())
    }

    /// Deletes a hotel, its rooms and their bookings. Deleting a missing id succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        HotelRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted hotel {}", id);

        Ok(())
    }
}
