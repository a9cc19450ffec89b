//! SeaORM entity models for the hotel reservation schema.
//!
//! The tables mirror the `migration` crate: users, hotels, rooms and bookings. Domain code
//! never hands these models out of the data layer; repositories convert them first.

pub mod prelude;

pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;
