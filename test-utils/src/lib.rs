//! Hotel Reservation Test Utils
//!
//! Shared testing utilities for the reservation service. The crate builds isolated test
//! contexts backed by in-memory SQLite databases and provides fixtures and factories for
//! users, hotels, rooms and bookings.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models, nothing is inserted
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn books_a_room() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, _hotel, room) = factory::helpers::create_room_with_dependencies(db).await?;
//!     let booking = factory::create_booking(db, &user.id, &room).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
