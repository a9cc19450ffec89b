use super::*;

/// Tests an owner cancelling a future booking.
///
/// Expected: Ok(Booking) cancelled at the clock's time
#[tokio::test]
async fn owner_cancels_future_booking() -> Result<(), AppError> {
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

    let cancelled = service.cancel(&identity(&user), &booking.id).await?;

    assert!(cancelled.cancelled);
    assert_eq!(cancelled.cancelled_at, Some(now()));

    let stored = repo.find_by_id(&booking.id).await?.unwrap();
    assert!(stored.cancelled);
    assert_eq!(stored.cancelled_at, Some(now()));

    Ok(())
}

/// Tests an admin cancelling someone else's booking that started yesterday.
///
/// Verifies that the past-date rule is not bypassed by admin rights.
///
/// Expected: Err(CancelPastBooking), booking still active
#[tokio::test]
async fn admin_cannot_cancel_started_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _hotel, room) = create_room_with_dependencies(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let booking = BookingFactory::new(db, &user.id, &room)
        .dates(date(2025, 2, 28), date(2025, 3, 4))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    let result = service.cancel(&identity(&admin), &booking.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::CancelPastBooking { booking_id })) if booking_id == booking.id
    ));
    assert!(!repo.find_by_id(&booking.id).await?.unwrap().cancelled);

    Ok(())
}

/// Tests an owner cancelling a booking that starts exactly now.
///
/// Expected: Err(CancelPastBooking), the start must be strictly in the future
#[tokio::test]
async fn booking_starting_now_cannot_be_cancelled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _hotel, room) = create_room_with_dependencies(db).await?;
    let booking = BookingFactory::new(db, &user.id, &room)
        .dates(now(), date(2025, 3, 3))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    let result = service.cancel(&identity(&user), &booking.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::CancelPastBooking { .. }))
    ));

    Ok(())
}

/// Tests a regular user cancelling another user's future booking.
///
/// Expected: Err(AccessDenied), booking still active
#[tokio::test]
async fn non_owner_cannot_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _hotel, room) = create_room_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let booking = BookingFactory::new(db, &owner.id, &room)
        .dates(date(2025, 3, 10), date(2025, 3, 15))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    let result = service.cancel(&identity(&stranger), &booking.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));
    assert!(!repo.find_by_id(&booking.id).await?.unwrap().cancelled);

    Ok(())
}

/// Tests an admin cancelling another user's future booking.
///
/// Expected: Ok(Booking) cancelled
#[tokio::test]
async fn admin_cancels_foreign_future_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _hotel, room) = create_room_with_dependencies(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let booking = BookingFactory::new(db, &owner.id, &room)
        .dates(date(2025, 3, 10), date(2025, 3, 15))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    let cancelled = service.cancel(&identity(&admin), &booking.id).await?;

    assert!(cancelled.cancelled);
    assert_eq!(cancelled.user_id, owner.id);

    Ok(())
}

/// Tests cancelling a booking twice.
///
/// Verifies that the second cancel succeeds and keeps the original cancellation time.
///
/// Expected: Ok both times, `cancelled_at` unchanged
#[tokio::test]
async fn cancelling_twice_keeps_first_timestamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _hotel, room) = create_room_with_dependencies(db).await?;
    let booking = BookingFactory::new(db, &user.id, &room)
        .dates(date(2025, 3, 10), date(2025, 3, 15))
        .cancelled_at(Some(date(2025, 2, 20)))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    let again = service.cancel(&identity(&user), &booking.id).await?;

    assert!(again.cancelled);
    assert_eq!(again.cancelled_at, Some(date(2025, 2, 20)));

    Ok(())
}

/// Tests cancelling a booking that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    let result = service
        .cancel(&identity(&user), "00000000-0000-0000-0000-00000000dead")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that cancelling frees the dates for a new booking.
///
/// Expected: Ok(Booking) for the same range after the cancel
#[tokio::test]
async fn cancelled_range_can_be_booked_again() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _hotel, room) = create_room_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);
    let caller = identity(&user);

    let first = service
        .create(&caller, params(&room, (2025, 3, 10), (2025, 3, 15)))
        .await?;
    service.cancel(&caller, &first.id).await?;
    let second = service
        .create(&caller, params(&room, (2025, 3, 10), (2025, 3, 15)))
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(active_bookings(db, &room.id).await?, 1);

    Ok(())
}
