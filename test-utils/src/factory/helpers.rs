//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh primary key in the format the service uses.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a user, a hotel and one room in that hotel.
///
/// # Returns
/// - `Ok((user, hotel, room))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::hotel::Model, entity::room::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let hotel = crate::factory::hotel::create_hotel(db).await?;
    let room = crate::factory::room::create_room(db, &hotel.id).await?;

    Ok((user, hotel, room))
}
