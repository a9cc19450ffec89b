//! Booking fixtures for creating in-memory test data.
//!
//! The default booking spans 2025-03-01 through 2025-03-05 on the default fixture room and
//! is owned by the default fixture user.

use chrono::{DateTime, TimeZone, Utc};
use entity::booking;

pub const DEFAULT_ID: &str = "00000000-0000-4000-8000-000000001000";

/// Midnight UTC on the given calendar day.
///
/// # Panics
/// Panics if the date does not exist. Only meant for literal test dates.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid fixture date")
}

/// Creates an active booking entity model with default values.
///
/// # Default Values
/// - from_date: `2025-03-01T00:00:00Z`
/// - to_date: `2025-03-05T00:00:00Z`
/// - created_date: `2025-02-01T00:00:00Z`
/// - cancelled: `false`
pub fn entity() -> booking::Model {
    booking::Model {
        id: DEFAULT_ID.to_string(),
        user_id: super::user::DEFAULT_ID.to_string(),
        hotel_id: super::hotel::DEFAULT_ID.to_string(),
        room_id: super::room::DEFAULT_ID.to_string(),
        from_date: date(2025, 3, 1),
        to_date: date(2025, 3, 5),
        created_date: date(2025, 2, 1),
        cancelled: false,
        cancelled_at: None,
    }
}

/// Creates a booking entity builder for customization.
pub fn entity_builder() -> BookingEntityBuilder {
    BookingEntityBuilder { entity: entity() }
}

/// Builder for booking entity models with custom values.
pub struct BookingEntityBuilder {
    entity: booking::Model,
}

impl BookingEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entity.user_id = user_id.into();
        self
    }

    pub fn hotel_id(mut self, hotel_id: impl Into<String>) -> Self {
        self.entity.hotel_id = hotel_id.into();
        self
    }

    pub fn room_id(mut self, room_id: impl Into<String>) -> Self {
        self.entity.room_id = room_id.into();
        self
    }

    pub fn from_date(mut self, from_date: DateTime<Utc>) -> Self {
        self.entity.from_date = from_date;
        self
    }

    pub fn to_date(mut self, to_date: DateTime<Utc>) -> Self {
        self.entity.to_date = to_date;
        self
    }

    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.entity.created_date = created_date;
        self
    }

    /// Sets the cancellation timestamp; `Some` also marks the booking cancelled.
    pub fn cancelled_at(mut self, cancelled_at: Option<DateTime<Utc>>) -> Self {
        self.entity.cancelled = cancelled_at.is_some();
        self.entity.cancelled_at = cancelled_at;
        self
    }

    pub fn build(self) -> booking::Model {
        self.entity
    }
}
