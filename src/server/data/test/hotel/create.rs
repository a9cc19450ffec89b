use super::*;

/// Tests creating a hotel.
///
/// Expected: Ok(Hotel) with a generated id and no rooms
#[tokio::test]
async fn creates_hotel_without_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let hotel = repo
        .create(CreateHotelParams {
            name: "Grand Budapest".to_string(),
            location: "Zubrowka".to_string(),
            rating: 5,
        })
        .await?;

    assert!(!hotel.id.is_empty());
    assert_eq!(hotel.name, "Grand Budapest");
    assert_eq!(hotel.location, "Zubrowka");
    assert_eq!(hotel.rating, 5);
    assert!(hotel.rooms.is_empty());

    let stored = repo.find_by_id(&hotel.id).await?;
    assert_eq!(stored, Some(hotel));

    Ok(())
}
