use super::*;

/// Tests two simultaneous requests for the same dates of one room.
///
/// Both requests are polled concurrently. The room lock serializes the overlap check and
/// the insert, so exactly one of them is admitted.
///
/// Expected: One Ok, one Err(UnavailableDate), one active booking
#[tokio::test]
async fn concurrent_overlapping_creates_admit_one() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, _hotel, room) = create_room_with_dependencies(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);
    let (alice, bob) = (identity(&alice), identity(&bob));

    let (first, second) = tokio::join!(
        service.create(&alice, params(&room, (2025, 3, 10), (2025, 3, 15))),
        service.create(&bob, params(&room, (2025, 3, 12), (2025, 3, 18))),
    );

    let admitted = [first.is_ok(), second.is_ok()]
        .iter()
        .filter(|ok| **ok)
        .count();
    assert_eq!(admitted, 1);

    let rejected = if first.is_err() { first } else { second };
    assert!(matches!(
        rejected,
        Err(AppError::BookingErr(BookingError::UnavailableDate { .. }))
    ));
    assert_eq!(active_bookings(db, &room.id).await?, 1);

    Ok(())
}

/// Tests simultaneous requests on different rooms.
///
/// Expected: Both Ok
#[tokio::test]
async fn concurrent_creates_on_different_rooms_both_succeed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_room_with_dependencies(db).await?;
    let other_room = factory::create_room(db, &hotel.id).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);
    let caller = identity(&user);

    let (first, second) = tokio::join!(
        service.create(&caller, params(&room, (2025, 3, 10), (2025, 3, 15))),
        service.create(&caller, params(&other_room, (2025, 3, 10), (2025, 3, 15))),
    );

    assert!(first.is_ok());
    assert!(second.is_ok());

    Ok(())
}
