use super::*;

/// Tests deleting the same booking twice.
///
/// Expected: Ok(()) both times and no record left
#[tokio::test]
async fn delete_twice_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _hotel, room) = create_room_with_dependencies(db).await?;
    let booking = factory::create_booking(db, &user.id, &room).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    service.delete(&booking.id).await?;
    service.delete(&booking.id).await?;

    assert!(repo.find_by_id(&booking.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a booking frees its dates.
///
/// Expected: Ok(Booking) over the deleted booking's dates
#[tokio::test]
async fn deleted_range_can_be_booked_again() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _hotel, room) = create_room_with_dependencies(db).await?;
    let booking = BookingFactory::new(db, &user.id, &room)
        .dates(date(2025, 3, 10), date(2025, 3, 15))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    service.delete(&booking.id).await?;
    service
        .create(&identity(&user), params(&room, (2025, 3, 10), (2025, 3, 15)))
        .await?;

    assert_eq!(active_bookings(db, &room.id).await?, 1);

    Ok(())
}
