use super::*;

/// Tests extending a stay.
///
/// Verifies that the cost is recomputed from the effective dates at the
/// room's nightly rate.
///
/// Expected: Ok with a 500.0 cost for five nights at 100.0
#[tokio::test]
async fn recomputes_cost_for_new_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let updated = service
        .update(
            reservation.id,
            UpdateReservationParams {
                check_out_date: Some(reservation.check_in_date + Duration::days(5)),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.total_cost, 500.0);
    assert_eq!(updated.customer_id, reservation.customer_id);

    Ok(())
}

/// Tests moving a reservation to a different room.
///
/// Verifies that the cost is recomputed at the new room's rate while the
/// availability flags stay untouched: the old room is not freed and the new
/// room is not claimed.
///
/// Expected: Ok with a 750.0 cost for three nights at 250.0
#[tokio::test]
async fn recomputes_cost_when_moving_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, old_room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let new_room = factory::room::create_room_with_price(db, 250.0).await?;

    let service = ReservationService::new(db);
    let updated = service
        .update(
            reservation.id,
            UpdateReservationParams {
                room_id: Some(new_room.id),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.room_id, new_room.id);
    assert_eq!(updated.total_cost, 750.0);

    // Moving neither frees the old room nor claims the new one
    let db_old = entity::prelude::Room::find_by_id(old_room.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!db_old.is_available);

    let db_new = entity::prelude::Room::find_by_id(new_room.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_new.is_available);

    Ok(())
}

/// Tests an update whose effective dates are not in order.
///
/// A mask that pulls the check-out date back to the check-in date must be
/// rejected and leave the stored reservation unchanged.
///
/// Expected: Err(AppError::InvalidArgument) with the row unchanged
#[tokio::test]
async fn rejects_invalid_effective_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .update(
            reservation.id,
            UpdateReservationParams {
                check_out_date: Some(reservation.check_in_date),
                ..Default::default()
            },
        )
        .await;

    let error = result.unwrap_err();
    match error {
        AppError::InvalidArgument(message) => {
            assert_eq!(message, "Check-out date must be after check-in date")
        }
        _ => panic!("Expected InvalidArgument, got: {:?}", error),
    }

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.check_out_date, reservation.check_out_date);
    assert_eq!(stored.total_cost, 300.0);

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReservationService::new(db);
    let result = service
        .update(999, UpdateReservationParams::default())
        .await;

    let error = result.unwrap_err();
    match error {
        AppError::NotFound(message) => assert_eq!(message, "Reservation not found"),
        _ => panic!("Expected NotFound, got: {:?}", error),
    }

    Ok(())
}

/// Tests rebinding a reservation to a customer that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    let result = service
        .update(
            reservation.id,
            UpdateReservationParams {
                customer_id: Some(999),
                ..Default::default()
            },
        )
        .await;

    let error = result.unwrap_err();
    match error {
        AppError::NotFound(message) => assert_eq!(message, "Customer not found"),
        _ => panic!("Expected NotFound, got: {:?}", error),
    }

    Ok(())
}
