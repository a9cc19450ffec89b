//! Booking persistence.
//!
//! `BookingStore` is the storage contract the booking engine is written against;
//! `BookingRepository` implements it on SeaORM. Overlap filtering happens in the query so
//! only conflicting rows are loaded.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::booking::{Booking, BookingUpdate, DateRange, NewBooking};

/// Storage operations the booking engine needs.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Active bookings of `room_id` whose range overlaps `range` (inclusive).
    async fn find_overlapping(&self, room_id: &str, range: &DateRange)
        -> Result<Vec<Booking>, DbErr>;

    /// Persists a new booking and returns it with its assigned id.
    async fn insert(&self, booking: NewBooking) -> Result<Booking, DbErr>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, DbErr>;

    async fn find_by_room(&self, room_id: &str) -> Result<Vec<Booking>, DbErr>;

    async fn find_by_hotel(&self, hotel_id: &str) -> Result<Vec<Booking>, DbErr>;

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Booking>, DbErr>;

    async fn find_all(&self) -> Result<Vec<Booking>, DbErr>;

    async fn find_by_user_and_room(
        &self,
        user_id: &str,
        room_id: &str,
    ) -> Result<Vec<Booking>, DbErr>;

    async fn find_by_user_and_hotel(
        &self,
        user_id: &str,
        hotel_id: &str,
    ) -> Result<Vec<Booking>, DbErr>;

    /// Applies `update`. Returns false when no booking has that id.
    async fn update(&self, id: &str, update: BookingUpdate) -> Result<bool, DbErr>;

    /// Removes the booking. Removing a missing id succeeds.
    async fn delete(&self, id: &str) -> Result<(), DbErr>;
}

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn list(&self, condition: Condition) -> Result<Vec<Booking>, DbErr> {
        let entities = Self::ordered(entity::prelude::Booking::find().filter(condition))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    fn ordered(select: Select<entity::booking::Entity>) -> Select<entity::booking::Entity> {
        select
            .order_by_asc(entity::booking::Column::FromDate)
            .order_by_asc(entity::booking::Column::Id)
    }
}

#[async_trait]
impl BookingStore for BookingRepository<'_> {
    async fn find_overlapping(
        &self,
        room_id: &str,
        range: &DateRange,
    ) -> Result<Vec<Booking>, DbErr> {
        self.list(
            Condition::all()
                .add(entity::booking::Column::RoomId.eq(room_id))
                .add(entity::booking::Column::Cancelled.eq(false))
                .add(entity::booking::Column::FromDate.lte(range.to()))
                .add(entity::booking::Column::ToDate.gte(range.from())),
        )
        .await
    }

    async fn insert(&self, booking: NewBooking) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(booking.user_id),
            hotel_id: ActiveValue::Set(booking.hotel_id),
            room_id: ActiveValue::Set(booking.room_id),
            from_date: ActiveValue::Set(booking.range.from()),
            to_date: ActiveValue::Set(booking.range.to()),
            created_date: ActiveValue::Set(booking.created_date),
            cancelled: ActiveValue::Set(false),
            cancelled_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    async fn find_by_room(&self, room_id: &str) -> Result<Vec<Booking>, DbErr> {
        self.list(Condition::all().add(entity::booking::Column::RoomId.eq(room_id)))
            .await
    }

    async fn find_by_hotel(&self, hotel_id: &str) -> Result<Vec<Booking>, DbErr> {
        self.list(Condition::all().add(entity::booking::Column::HotelId.eq(hotel_id)))
            .await
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Booking>, DbErr> {
        self.list(Condition::all().add(entity::booking::Column::UserId.eq(user_id)))
            .await
    }

    async fn find_all(&self) -> Result<Vec<Booking>, DbErr> {
        self.list(Condition::all()).await
    }

    async fn find_by_user_and_room(
        &self,
        user_id: &str,
        room_id: &str,
    ) -> Result<Vec<Booking>, DbErr> {
        self.list(
            Condition::all()
                .add(entity::booking::Column::UserId.eq(user_id))
                .add(entity::booking::Column::RoomId.eq(room_id)),
        )
        .await
    }

    async fn find_by_user_and_hotel(
        &self,
        user_id: &str,
        hotel_id: &str,
    ) -> Result<Vec<Booking>, DbErr> {
        self.list(
            Condition::all()
                .add(entity::booking::Column::UserId.eq(user_id))
                .add(entity::booking::Column::HotelId.eq(hotel_id)),
        )
        .await
    }

    async fn update(&self, id: &str, update: BookingUpdate) -> Result<bool, DbErr> {
        let Some(entity) = entity::prelude::Booking::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::booking::ActiveModel = entity.into();
        match update {
            BookingUpdate::Cancel { at } => {
                active.cancelled = ActiveValue::Set(true);
                active.cancelled_at = ActiveValue::Set(Some(at));
            }
        }
        active.update(self.db).await?;

        Ok(true)
    }

    async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Booking::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
