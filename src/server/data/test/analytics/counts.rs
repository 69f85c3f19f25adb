use super::*;

/// Tests all count queries over an empty database.
///
/// Expected: Ok(0) from every count
#[tokio::test]
async fn counts_are_zero_on_empty_database() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnalyticsRepository::new(db);

    assert_eq!(repo.count_reservations().await?, 0);
    assert_eq!(repo.count_customers().await?, 0);
    assert_eq!(repo.count_rooms().await?, 0);
    assert_eq!(repo.count_occupied_rooms().await?, 0);

    Ok(())
}

/// Tests the room and occupancy counts.
///
/// Verifies that every room counts toward the total while only rooms with a
/// cleared availability flag count as occupied.
///
/// Expected: Ok(3) total and Ok(1) occupied
#[tokio::test]
async fn counts_rooms_and_occupancy() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room(db).await?;
    factory::room::create_room(db).await?;
    factory::room::RoomFactory::new(db)
        .available(false)
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);

    assert_eq!(repo.count_rooms().await?, 3);
    assert_eq!(repo.count_occupied_rooms().await?, 1);

    Ok(())
}

/// Tests the reservation and customer counts.
///
/// Expected: Ok(2) from both counts
#[tokio::test]
async fn counts_reservations_and_customers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = AnalyticsRepository::new(db);

    assert_eq!(repo.count_reservations().await?, 2);
    assert_eq!(repo.count_customers().await?, 2);

    Ok(())
}
