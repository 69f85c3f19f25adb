use super::*;

/// Tests all revenue sums over an empty database.
///
/// The SQL SUM over zero rows comes back NULL and must be mapped to zero
/// rather than erroring.
///
/// Expected: Ok(0.0) from every sum
#[tokio::test]
async fn sums_are_zero_on_empty_database() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnalyticsRepository::new(db);

    assert_eq!(repo.sum_transaction_amounts().await?, 0.0);
    assert_eq!(repo.sum_reservation_costs().await?, 0.0);
    assert_eq!(repo.sum_order_costs().await?, 0.0);

    Ok(())
}

/// Tests summing recorded payment amounts.
///
/// Expected: Ok(250.0) for payments of 100 and 150
#[tokio::test]
async fn sums_transaction_amounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::transaction::TransactionFactory::new(db, reservation.id)
        .amount(100.0)
        .build()
        .await?;
    factory::transaction::TransactionFactory::new(db, reservation.id)
        .amount(150.0)
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);

    assert_eq!(repo.sum_transaction_amounts().await?, 250.0);

    Ok(())
}

/// Tests summing reservation costs and order totals.
///
/// Expected: Ok(300.0) for the booking and Ok(85.0) for the orders
#[tokio::test]
async fn sums_reservation_and_order_costs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    factory::room_service_order::RoomServiceOrderFactory::new(db, reservation.id)
        .total_cost(60.0)
        .build()
        .await?;
    factory::room_service_order::RoomServiceOrderFactory::new(db, reservation.id)
        .total_cost(25.0)
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);

    assert_eq!(repo.sum_reservation_costs().await?, 300.0);
    assert_eq!(repo.sum_order_costs().await?, 85.0);

    Ok(())
}
