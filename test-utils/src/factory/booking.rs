//! Booking factory for creating test booking entities.
//!
//! Bookings are inserted directly, bypassing the availability check. Use it to arrange
//! existing state (including overlapping or cancelled bookings) before exercising the
//! service.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::new_uuid;
use crate::fixture;

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, &user.id, &room)
///     .dates(date(2025, 3, 1), date(2025, 3, 5))
///     .cancelled_at(Some(date(2025, 2, 20)))
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::booking::Model,
}

impl<'a> BookingFactory<'a> {
    /// Creates a factory for a booking of `room` by `user_id`.
    ///
    /// The hotel id is copied from the room, the same way the service does it.
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: impl Into<String>,
        room: &entity::room::Model,
    ) -> Self {
        let entity = fixture::booking::entity_builder()
            .id(new_uuid())
            .user_id(user_id)
            .room_id(room.id.clone())
            .hotel_id(room.hotel_id.clone())
            .build();

        Self { db, entity }
    }

    /// Sets the booked range.
    pub fn dates(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.entity.from_date = from;
        self.entity.to_date = to;
        self
    }

    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.entity.created_date = created_date;
        self
    }

    /// Marks the booking cancelled at the given time, or active when `None`.
    pub fn cancelled_at(mut self, cancelled_at: Option<DateTime<Utc>>) -> Self {
        self.entity.cancelled = cancelled_at.is_some();
        self.entity.cancelled_at = cancelled_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            user_id: ActiveValue::Set(self.entity.user_id),
            hotel_id: ActiveValue::Set(self.entity.hotel_id),
            room_id: ActiveValue::Set(self.entity.room_id),
            from_date: ActiveValue::Set(self.entity.from_date),
            to_date: ActiveValue::Set(self.entity.to_date),
            created_date: ActiveValue::Set(self.entity.created_date),
            cancelled: ActiveValue::Set(self.entity.cancelled),
            cancelled_at: ActiveValue::Set(self.entity.cancelled_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active booking with the fixture's default dates.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    room: &entity::room::Model,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, room).build().await
}
