//! Booking domain models and parameters.
//!
//! A booking reserves one room for a closed date range `[from, to]`. Two ranges conflict when
//! they share any instant, so a stay ending on the day another begins is still a conflict.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::error::booking::BookingError,
};

/// Closed range of instants, `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl DateRange {
    /// Builds a range, rejecting one that ends before it starts.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, BookingError> {
        if from > to {
            return Err(BookingError::InvalidDateRange);
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Inclusive overlap: true when the ranges share at least one instant.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from <= other.to && self.to >= other.from
    }

    /// The whole range lies before `now`.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.to < now
    }

    /// The range began at or before `now`.
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.from <= now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    Active,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub hotel_id: String,
    pub room_id: String,
    pub range: DateRange,
    pub created_date: DateTime<Utc>,
    pub cancelled: bool,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn state(&self) -> BookingState {
        if self.cancelled {
            BookingState::Cancelled
        } else {
            BookingState::Active
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            user_id: self.user_id,
            hotel_id: self.hotel_id,
            room_id: self.room_id,
            from_date: self.range.from,
            to_date: self.range.to,
            created_date: self.created_date,
            cancelled: self.cancelled,
            cancelled_at: self.cancelled_at,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// Stored ranges were validated on insert, so they are taken as-is.
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            hotel_id: entity.hotel_id,
            room_id: entity.room_id,
            range: DateRange {
                from: entity.from_date,
                to: entity.to_date,
            },
            created_date: entity.created_date,
            cancelled: entity.cancelled,
            cancelled_at: entity.cancelled_at,
        }
    }
}

/// A booking about to be admitted. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub user_id: String,
    pub hotel_id: String,
    pub room_id: String,
    pub range: DateRange,
    pub created_date: DateTime<Utc>,
}

/// Request to book a room, before the owner and clock are applied.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub room_id: String,
    pub hotel_id: String,
    pub range: DateRange,
}

impl CreateBookingParams {
    /// # Returns
    /// - `Err(BookingError::InvalidDateRange)` - `fromDate` is after `toDate`
    pub fn from_dto(
        room_id: String,
        hotel_id: String,
        dto: CreateBookingDto,
    ) -> Result<Self, BookingError> {
        Ok(Self {
            room_id,
            hotel_id,
            range: DateRange::new(dto.from_date, dto.to_date)?,
        })
    }
}

/// The only mutation a stored booking accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingUpdate {
    Cancel { at: DateTime<Utc> },
}
