use super::*;

/// Tests inserting a new booking.
///
/// Verifies that the repository assigns an id and stores the booking as active with the
/// requested range and creation time.
///
/// Expected: Ok(Booking) readable through find_by_id
#[tokio::test]
async fn inserts_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_room_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .insert(NewBooking {
            user_id: user.id.clone(),
            hotel_id: hotel.id.clone(),
            room_id: room.id.clone(),
            range: range((2025, 3, 1), (2025, 3, 5)),
            created_date: date(2025, 2, 1),
        })
        .await?;

    assert!(!booking.id.is_empty());
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.hotel_id, hotel.id);
    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.range.from(), date(2025, 3, 1));
    assert_eq!(booking.range.to(), date(2025, 3, 5));
    assert_eq!(booking.created_date, date(2025, 2, 1));
    assert!(!booking.cancelled);
    assert!(booking.cancelled_at.is_none());

    let stored = repo.find_by_id(&booking.id).await?;
    assert_eq!(stored, Some(booking));

    Ok(())
}

/// Tests that each insert gets its own id.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_room_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let new_booking = |from, to| NewBooking {
        user_id: user.id.clone(),
        hotel_id: hotel.id.clone(),
        room_id: room.id.clone(),
        range: range(from, to),
        created_date: date(2025, 2, 1),
    };

    let first = repo.insert(new_booking((2025, 3, 1), (2025, 3, 2))).await?;
    let second = repo.insert(new_booking((2025, 4, 1), (2025, 4, 2))).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
