use super::*;

/// Tests counting rooms grouped by type.
///
/// Expected: Ok with one pair per type carrying its room count
#[tokio::test]
async fn counts_rooms_per_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .room_type("Single")
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_type("Single")
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_type("Suite")
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);
    let counts = repo.room_type_counts().await?;

    assert_eq!(counts.len(), 2);
    assert!(counts.contains(&("Single".to_string(), 2)));
    assert!(counts.contains(&("Suite".to_string(), 1)));

    Ok(())
}

/// Tests counting order lines grouped by catalog item.
///
/// Each line counts once regardless of its quantity, so one line for five
/// units still contributes a single count.
///
/// Expected: Ok with line counts per item
#[tokio::test]
async fn counts_order_lines_per_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let coffee = factory::room_service_item::create_item(db).await?;
    let wine = factory::room_service_item::create_item(db).await?;

    factory::room_service_order::RoomServiceOrderFactory::new(db, reservation.id)
        .with_line(coffee.id, 5)
        .with_line(wine.id, 2)
        .build()
        .await?;
    factory::room_service_order::RoomServiceOrderFactory::new(db, reservation.id)
        .with_line(coffee.id, 1)
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);
    let counts = repo.order_item_counts().await?;

    assert_eq!(counts.len(), 2);
    assert!(counts.contains(&(coffee.id, 2)));
    assert!(counts.contains(&(wine.id, 1)));

    Ok(())
}
