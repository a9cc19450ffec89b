//! Serializable data transfer objects exchanged over the HTTP API.
//!
//! Field names follow the JSON wire format (`camelCase`, with `userID`/`hotelID`/`roomID`
//! back references). Server-side domain models convert into these with `into_dto()`.

pub mod api;
pub mod auth;
pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;
