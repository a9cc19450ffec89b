//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as default values for
//! the factory builders. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let booking = fixture::booking::entity();
//!
//! let cancelled = fixture::booking::entity_builder()
//!     .cancelled_at(Some(at))
//!     .build();
//! ```

pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;

pub use booking::{entity as booking_entity, entity_builder as booking_entity_builder};
pub use hotel::{entity as hotel_entity, entity_builder as hotel_entity_builder};
pub use room::{entity as room_entity, entity_builder as room_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
