use super::*;

/// Tests placing an order with line items.
///
/// Verifies that the repository inserts the order row and one line row per
/// ordered item, and returns the lines on the domain model.
///
/// Expected: Ok with order and two lines created
#[tokio::test]
async fn creates_order_with_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_service_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let breakfast = factory::room_service_item::create_item_with_price(db, 10.0).await?;
    let wine = factory::room_service_item::create_item_with_price(db, 20.0).await?;

    let repo = RoomServiceOrderRepository::new(db);
    let order = repo
        .create(
            reservation.id,
            40.0,
            vec![
                OrderLine {
                    item_id: breakfast.id,
                    quantity: 2,
                },
                OrderLine {
                    item_id: wine.id,
                    quantity: 1,
                },
            ],
        )
        .await?;

    assert!(order.id > 0);
    assert_eq!(order.reservation_id, reservation.id);
    assert_eq!(order.total_cost, 40.0);
    assert_eq!(order.status, "Pending");
    assert_eq!(order.items.len(), 2);

    // Verify line rows exist in database
    let line_count = entity::prelude::RoomServiceOrderItem::find()
        .filter(entity::room_service_order_item::Column::RoomServiceOrderId.eq(order.id))
        .count(db)
        .await?;
    assert_eq!(line_count, 2);

    Ok(())
}

/// Tests placing an order with no lines.
///
/// Expected: Ok with order created and zero line rows
#[tokio::test]
async fn creates_order_without_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_service_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = RoomServiceOrderRepository::new(db);
    let order = repo.create(reservation.id, 0.0, Vec::new()).await?;

    assert!(order.items.is_empty());

    let line_count = entity::prelude::RoomServiceOrderItem::find()
        .filter(entity::room_service_order_item::Column::RoomServiceOrderId.eq(order.id))
        .count(db)
        .await?;
    assert_eq!(line_count, 0);

    Ok(())
}
