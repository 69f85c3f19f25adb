use super::*;

/// Tests summing order costs for a reservation with no orders.
///
/// The SQL SUM over zero rows comes back NULL and must be mapped to zero.
///
/// Expected: Ok(0.0)
#[tokio::test]
async fn returns_zero_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_service_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = RoomServiceOrderRepository::new(db);
    let total = repo.sum_costs_by_reservation(reservation.id).await?;

    assert_eq!(total, 0.0);

    Ok(())
}

/// Tests that the sum only covers orders of the given reservation.
///
/// Expected: Ok with the matching orders summed and the other reservation's
/// order excluded
#[tokio::test]
async fn sums_only_matching_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_service_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, first) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (_, _, second) = factory::helpers::create_reservation_with_dependencies(db).await?;

    factory::room_service_order::RoomServiceOrderFactory::new(db, first.id)
        .total_cost(60.0)
        .build()
        .await?;
    factory::room_service_order::RoomServiceOrderFactory::new(db, first.id)
        .total_cost(25.0)
        .build()
        .await?;
    factory::room_service_order::RoomServiceOrderFactory::new(db, second.id)
        .total_cost(40.0)
        .build()
        .await?;

    let repo = RoomServiceOrderRepository::new(db);
    let total = repo.sum_costs_by_reservation(first.id).await?;

    assert_eq!(total, 85.0);

    Ok(())
}
