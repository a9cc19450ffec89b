use super::*;

/// Tests getting a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_for_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo
        .find_by_id("00000000-0000-0000-0000-00000000dead")
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests listing the bookings of one room.
///
/// Verifies that cancelled bookings are included, other rooms are excluded and results are
/// ordered by start date.
///
/// Expected: Ok with both bookings of the room, earliest first
#[tokio::test]
async fn find_by_room_lists_room_bookings_in_date_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_room_with_dependencies(db).await?;
    let other_room = factory::room::create_room(db, &hotel.id).await?;

    let later = BookingFactory::new(db, &user.id, &room)
        .dates(date(2025, 4, 1), date(2025, 4, 3))
        .build()
        .await?;
    let earlier = BookingFactory::new(db, &user.id, &room)
        .dates(date(2025, 3, 1), date(2025, 3, 3))
        .cancelled_at(Some(date(2025, 2, 15)))
        .build()
        .await?;
    factory::create_booking(db, &user.id, &other_room).await?;

    let repo = BookingRepository::new(db);
    let result = repo.find_by_room(&room.id).await?;

    let ids: Vec<_> = result.iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests listing the bookings of a hotel across its rooms.
///
/// Expected: Ok with bookings of both rooms and none of the other hotel
#[tokio::test]
async fn find_by_hotel_spans_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_room_with_dependencies(db).await?;
    let second_room = factory::room::create_room(db, &hotel.id).await?;
    let other_hotel = factory::hotel::create_hotel(db).await?;
    let other_room = factory::room::create_room(db, &other_hotel.id).await?;

    factory::create_booking(db, &user.id, &room).await?;
    factory::create_booking(db, &user.id, &second_room).await?;
    factory::create_booking(db, &user.id, &other_room).await?;

    let repo = BookingRepository::new(db);
    let result = repo.find_by_hotel(&hotel.id).await?;

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|b| b.hotel_id == hotel.id));

    Ok(())
}

/// Tests the user-scoped listings.
///
/// Verifies that `find_by_user`, `find_by_user_and_room` and `find_by_user_and_hotel` only
/// return the given user's bookings while `find_all` returns everyone's.
///
/// Expected: Ok with one booking per scoped query and two overall
#[tokio::test]
async fn user_scoped_listings_exclude_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (alice, hotel, room) = create_room_with_dependencies(db).await?;
    let bob = factory::create_user(db).await?;

    let own = BookingFactory::new(db, &alice.id, &room)
        .dates(date(2025, 3, 1), date(2025, 3, 2))
        .build()
        .await?;
    BookingFactory::new(db, &bob.id, &room)
        .dates(date(2025, 3, 10), date(2025, 3, 12))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let by_user = repo.find_by_user(&alice.id).await?;
    let by_room = repo.find_by_user_and_room(&alice.id, &room.id).await?;
    let by_hotel = repo.find_by_user_and_hotel(&alice.id, &hotel.id).await?;
    let all = repo.find_all().await?;

    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].id, own.id);
    assert_eq!(by_room.len(), 1);
    assert_eq!(by_room[0].id, own.id);
    assert_eq!(by_hotel.len(), 1);
    assert_eq!(by_hotel[0].id, own.id);
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests listings with no matching rows.
///
/// Expected: Ok(empty), never an error
#[tokio::test]
async fn empty_listings_are_ok() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_room_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);

    assert!(repo.find_by_room(&room.id).await?.is_empty());
    assert!(repo.find_by_hotel(&hotel.id).await?.is_empty());
    assert!(repo.find_by_user(&user.id).await?.is_empty());
    assert!(repo.find_all().await?.is_empty());

    Ok(())
}
