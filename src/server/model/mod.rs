//! Domain models and operation-specific parameter types.
//!
//! Domain models sit between the data layer and the controllers. Repositories convert entity
//! models into these with `from_entity`, controllers convert them into DTOs with `into_dto`.

pub mod auth;
pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;
