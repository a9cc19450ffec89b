//! Booking admission and lifecycle.
//!
//! Admission for a room runs under that room's lock from `RoomLocks`, so the overlap check
//! and the insert are atomic with respect to other admissions on the same room. Rooms never
//! contend with each other. No booking state is cached; every decision reads the store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::server::{
    data::booking::BookingStore,
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        auth::Identity,
        booking::{
            Booking, BookingState, BookingUpdate, CreateBookingParams, DateRange, NewBooking,
        },
    },
};

/// One async lock per room id, created on first use.
#[derive(Clone, Default)]
pub struct RoomLocks {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl RoomLocks {
    /// Waits for exclusive admission rights on `room_id`.
    pub async fn lock(&self, room_id: &str) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the map shard is released before awaiting.
        let lock = self
            .locks
            .entry(room_id.to_string())
            .or_default()
            .value()
            .clone();

        lock.lock_owned().await
    }

    /// Drops the lock of a deleted room.
    pub fn forget(&self, room_id: &str) {
        self.locks.remove(room_id);
    }
}

/// Engine for creating, listing, cancelling and deleting bookings.
pub struct BookingService<'a> {
    store: &'a dyn BookingStore,
    locks: &'a RoomLocks,
    clock: fn() -> DateTime<Utc>,
}

impl<'a> BookingService<'a> {
    /// Creates a BookingService reading the wall clock.
    ///
    /// # Arguments
    /// - `store` - Booking persistence
    /// - `locks` - Shared per-room admission locks
    pub fn new(store: &'a dyn BookingStore, locks: &'a RoomLocks) -> Self {
        Self {
            store,
            locks,
            clock: Utc::now,
        }
    }

    /// Replaces the clock used for `created_date`, `cancelled_at` and past-date checks.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Lists bookings of a room. Non-admins only see their own.
    pub async fn list_by_room(
        &self,
        identity: &Identity,
        room_id: &str,
    ) -> Result<Vec<Booking>, AppError> {
        let bookings = if identity.is_admin {
            self.store.find_by_room(room_id).await?
        } else {
            self.store
                .find_by_user_and_room(&identity.user_id, room_id)
                .await?
        };

        Ok(bookings)
    }

    /// Lists bookings of a hotel. Non-admins only see their own.
    pub async fn list_by_hotel(
        &self,
        identity: &Identity,
        hotel_id: &str,
    ) -> Result<Vec<Booking>, AppError> {
        let bookings = if identity.is_admin {
            self.store.find_by_hotel(hotel_id).await?
        } else {
            self.store
                .find_by_user_and_hotel(&identity.user_id, hotel_id)
                .await?
        };

        Ok(bookings)
    }

    /// Lists every booking for admins, the caller's own bookings otherwise.
    pub async fn list_all(&self, identity: &Identity) -> Result<Vec<Booking>, AppError> {
        let bookings = if identity.is_admin {
            self.store.find_all().await?
        } else {
            self.store.find_by_user(&identity.user_id).await?
        };

        Ok(bookings)
    }

    /// Gets a single booking visible to the caller.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking exists and caller owns it or is admin
    /// - `Err(AppError::NotFound)` - No booking with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Booking belongs to someone else
    pub async fn get(&self, identity: &Identity, booking_id: &str) -> Result<Booking, AppError> {
        let booking = self
            .store
            .find_by_id(booking_id)
            .await?
            .ok_or_else(AppError::not_found)?;

        if !identity.can_access(&booking.user_id) {
            return Err(AuthError::AccessDenied(
                identity.user_id.clone(),
                format!("read booking {}", booking_id),
            )
            .into());
        }

        Ok(booking)
    }

    /// Books a room for the caller.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The persisted booking with its id
    /// - `Err(BookingError::InvalidDateRange)` - The whole range is already in the past
    /// - `Err(BookingError::UnavailableDate)` - The range overlaps an active booking
    pub async fn create(
        &self,
        identity: &Identity,
        params: CreateBookingParams,
    ) -> Result<Booking, AppError> {
        if params.range.has_ended(self.now()) {
            return Err(BookingError::InvalidDateRange.into());
        }

        let _guard = self.locks.lock(&params.room_id).await;

        self.try_reserve(
            &params.room_id,
            params.range,
            &identity.user_id,
            &params.hotel_id,
        )
        .await
    }

    /// Admits a booking if no active booking of the room overlaps `range`.
    ///
    /// Callers must hold the room's lock from `RoomLocks`.
    pub async fn try_reserve(
        &self,
        room_id: &str,
        range: DateRange,
        user_id: &str,
        hotel_id: &str,
    ) -> Result<Booking, AppError> {
        let conflicts = self.store.find_overlapping(room_id, &range).await?;
        if !conflicts.is_empty() {
            tracing::debug!(
                "Rejected booking of room {} from {} to {}: {} conflicting booking(s)",
                room_id,
                range.from(),
                range.to(),
                conflicts.len()
            );
            return Err(BookingError::UnavailableDate {
                room_id: room_id.to_string(),
            }
            .into());
        }

        let booking = self
            .store
            .insert(NewBooking {
                user_id: user_id.to_string(),
                hotel_id: hotel_id.to_string(),
                room_id: room_id.to_string(),
                range,
                created_date: self.now(),
            })
            .await?;

        tracing::info!(
            "Booking {} created for room {} by user {}",
            booking.id,
            room_id,
            user_id
        );

        Ok(booking)
    }

    /// Cancels a booking that has not started yet.
    ///
    /// The past-date rule applies to admins too. Cancelling an already cancelled booking
    /// succeeds without changing its `cancelled_at`.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking in its cancelled state
    /// - `Err(AppError::NotFound)` - No booking with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Non-admin caller does not own it
    /// - `Err(BookingError::CancelPastBooking)` - `from_date` is not after now
    pub async fn cancel(&self, identity: &Identity, booking_id: &str) -> Result<Booking, AppError> {
        let mut booking = self
            .store
            .find_by_id(booking_id)
            .await?
            .ok_or_else(AppError::not_found)?;

        if !identity.can_access(&booking.user_id) {
            return Err(AuthError::AccessDenied(
                identity.user_id.clone(),
                format!("cancel booking {}", booking_id),
            )
            .into());
        }

        let now = self.now();
        if booking.range.has_started(now) {
            return Err(BookingError::CancelPastBooking {
                booking_id: booking_id.to_string(),
            }
            .into());
        }

        if booking.state() == BookingState::Cancelled {
            return Ok(booking);
        }

        let found = self
            .store
            .update(booking_id, BookingUpdate::Cancel { at: now })
            .await?;
        if !found {
            return Err(AppError::not_found());
        }

        tracing::info!("Booking {} cancelled by user {}", booking_id, identity.user_id);

        booking.cancelled = true;
        booking.cancelled_at = Some(now);

        Ok(booking)
    }

    /// Hard-deletes a booking. Callers must already have checked admin rights.
    pub async fn delete(&self, booking_id: &str) -> Result<(), AppError> {
        self.store.delete(booking_id).await?;

        tracing::info!("Booking {} deleted", booking_id);

        Ok(())
    }
}
