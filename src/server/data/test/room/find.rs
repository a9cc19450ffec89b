use super::*;

/// Tests listing rooms by hotel.
///
/// Expected: Ok with only the rooms of the requested hotel
#[tokio::test]
async fn find_by_hotel_filters_by_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;
    let other = factory::create_hotel(db).await?;
    factory::create_room(db, &hotel.id).await?;
    factory::create_room(db, &hotel.id).await?;
    factory::create_room(db, &other.id).await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.find_by_hotel(&hotel.id).await?;

    assert_eq!(rooms.len(), 2);
    assert!(rooms.iter().all(|r| r.hotel_id == hotel.id));

    Ok(())
}

/// Tests reading a room whose stored size is unknown.
///
/// Expected: Err(AppError::Internal)
#[tokio::test]
async fn rejects_unknown_stored_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;
    let room = factory::room::RoomFactory::new(db, &hotel.id)
        .size("Penthouse")
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let result = repo.find_by_id(&room.id).await;

    assert!(matches!(result, Err(AppError::Internal(_))));

    Ok(())
}
