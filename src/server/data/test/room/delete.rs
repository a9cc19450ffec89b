use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a room with bookings.
///
/// Expected: Ok(()) twice, room and its bookings gone, hotel kept
#[tokio::test]
async fn deletes_room_and_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = factory::helpers::create_room_with_dependencies(db).await?;
    factory::create_booking(db, &user.id, &room).await?;

    let repo = RoomRepository::new(db);
    repo.delete(&room.id).await?;
    repo.delete(&room.id).await?;

    assert!(repo.find_by_id(&room.id).await?.is_none());
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);
    assert!(entity::prelude::Hotel::find_by_id(hotel.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
