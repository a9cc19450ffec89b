//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. The booking repository
//! additionally implements the `BookingStore` trait the booking engine depends on.

pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;
