use super::*;

/// Seeds one room with a booking by `alice` and one by `bob`.
async fn seed(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::user::Model, entity::room::Model), DbErr> {
    let (alice, _hotel, room) = create_room_with_dependencies(db).await?;
    let bob = factory::create_user(db).await?;

    BookingFactory::new(db, &alice.id, &room)
        .dates(date(2025, 3, 10), date(2025, 3, 12))
        .build()
        .await?;
    BookingFactory::new(db, &bob.id, &room)
        .dates(date(2025, 3, 20), date(2025, 3, 22))
        .build()
        .await?;

    Ok((alice, bob, room))
}

/// Tests that regular users only see their own bookings.
///
/// Verifies the room, hotel and global listings all filter by the caller.
///
/// Expected: Ok with exactly the caller's booking in every listing
#[tokio::test]
async fn regular_user_sees_only_own_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, _bob, room) = seed(db).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);
    let caller = identity(&alice);

    let by_room = service.list_by_room(&caller, &room.id).await?;
    let by_hotel = service.list_by_hotel(&caller, &room.hotel_id).await?;
    let all = service.list_all(&caller).await?;

    for listing in [by_room, by_hotel, all] {
        assert_eq!(listing.len(), 1);
        assert!(listing.iter().all(|b| b.user_id == alice.id));
    }

    Ok(())
}

/// Tests that admins see every booking.
///
/// Expected: Ok with both users' bookings in every listing
#[tokio::test]
async fn admin_sees_all_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_alice, _bob, room) = seed(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);
    let caller = identity(&admin);

    assert_eq!(service.list_by_room(&caller, &room.id).await?.len(), 2);
    assert_eq!(service.list_by_hotel(&caller, &room.hotel_id).await?.len(), 2);
    assert_eq!(service.list_all(&caller).await?.len(), 2);

    Ok(())
}

/// Tests a user with no bookings.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn user_without_bookings_gets_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_alice, _bob, _room) = seed(db).await?;
    let carol = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    assert!(service.list_all(&identity(&carol)).await?.is_empty());

    Ok(())
}
