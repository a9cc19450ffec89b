use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hotel::{CreateHotelParams, Hotel, HotelField};

pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a hotel. New hotels have no rooms.
    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, DbErr> {
        let entity = entity::hotel::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(params.name),
            location: ActiveValue::Set(params.location),
            rating: ActiveValue::Set(params.rating),
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity, Vec::new()))
    }

    /// Gets a hotel with the ids of its rooms.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, DbErr> {
        let Some(entity) = entity::prelude::Hotel::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let rooms = entity
            .find_related(entity::prelude::Room)
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Hotel::from_entity(entity, rooms)))
    }

    /// Lists all hotels ordered by name, each with its room ids.
    pub async fn find_all(&self) -> Result<Vec<Hotel>, DbErr> {
        let hotels = entity::prelude::Hotel::find()
            .find_with_related(entity::prelude::Room)
            .order_by_asc(entity::hotel::Column::Name)
            .order_by_asc(entity::hotel::Column::Id)
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(hotels
            .into_iter()
            .map(|(hotel, rooms)| Hotel::from_entity(hotel, rooms))
            .collect())
    }

    /// Applies the given field changes to a hotel.
    ///
    /// # Returns
    /// - `Ok(true)` - Hotel found and updated
    /// - `Ok(false)` - No hotel with that id
    pub async fn update(&self, id: &str, fields: Vec<HotelField>) -> Result<bool, DbErr> {
        let Some(entity) = entity::prelude::Hotel::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::hotel::ActiveModel = entity.into();
        for field in fields {
            match field {
                HotelField::Name(value) => active.name = ActiveValue::Set(value),
                HotelField::Location(value) => active.location = ActiveValue::Set(value),
            }
        }
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes a hotel together with its rooms and their bookings.
    ///
    /// Deleting a missing id is not an error.
    pub async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::HotelId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Room::delete_many()
            .filter(entity::room::Column::HotelId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Hotel::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
