use super::*;

/// Tests cancelling a stored booking.
///
/// Verifies that the cancelled flag and timestamp are both written and nothing else changes.
///
/// Expected: Ok(true), booking reads back as cancelled at the given time
#[tokio::test]
async fn cancel_sets_flag_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _hotel, room) = create_room_with_dependencies(db).await?;
    let booking = factory::create_booking(db, &user.id, &room).await?;

    let repo = BookingRepository::new(db);
    let found = repo
        .update(
            &booking.id,
            BookingUpdate::Cancel {
                at: date(2025, 2, 20),
            },
        )
        .await?;

    assert!(found);

    let stored = repo.find_by_id(&booking.id).await?.unwrap();
    assert!(stored.cancelled);
    assert_eq!(stored.cancelled_at, Some(date(2025, 2, 20)));
    assert_eq!(stored.range.from(), booking.from_date);
    assert_eq!(stored.range.to(), booking.to_date);

    Ok(())
}

/// Tests updating a booking that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let found = repo
        .update(
            "00000000-0000-0000-0000-00000000dead",
            BookingUpdate::Cancel {
                at: date(2025, 2, 20),
            },
        )
        .await?;

    assert!(!found);

    Ok(())
}
