use super::*;

/// Tests reading a booking as its owner, as an admin and as a stranger.
///
/// Expected: Ok for owner and admin, Err(AccessDenied) for the stranger
#[tokio::test]
async fn only_owner_or_admin_can_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _hotel, room) = create_room_with_dependencies(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let stranger = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &owner.id, &room).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    assert_eq!(service.get(&identity(&owner), &booking.id).await?.id, booking.id);
    assert_eq!(service.get(&identity(&admin), &booking.id).await?.id, booking.id);

    let result = service.get(&identity(&stranger), &booking.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}

/// Tests reading a booking that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;

    let repo = BookingRepository::new(db);
    let locks = RoomLocks::default();
    let service = BookingService::new(&repo, &locks).with_clock(now);

    let result = service
        .get(&identity(&admin), "00000000-0000-0000-0000-00000000dead")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
