//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Defaults come from the matching fixture with a
//! fresh UUID so multiple entities can coexist in one database.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let (owner, hotel, room) = factory::helpers::create_room_with_dependencies(&db).await?;
//!
//! let booking = factory::booking::BookingFactory::new(&db, &user.id, &room)
//!     .dates(from, to)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod helpers;
pub mod hotel;
pub mod room;
pub mod user;

pub use booking::create_booking;
pub use hotel::create_hotel;
pub use room::create_room;
pub use user::create_user;
