use super::*;

/// Tests a partial update through the field mask.
///
/// Verifies that only the fields present in the mask change, while the
/// cost always takes the recomputed value passed alongside.
///
/// Expected: Ok with the check-out date and cost changed
#[tokio::test]
async fn updates_fields_in_mask() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let new_check_out = reservation.check_in_date + Duration::days(5);

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update(
            reservation.id,
            UpdateReservationParams {
                check_out_date: Some(new_check_out),
                ..Default::default()
            },
            500.0,
        )
        .await?;

    assert_eq!(updated.check_out_date, new_check_out);
    assert_eq!(updated.total_cost, 500.0);
    assert_eq!(updated.customer_id, customer.id);
    assert_eq!(updated.check_in_date, reservation.check_in_date);

    Ok(())
}

/// Tests updating a reservation ID that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn returns_record_not_found_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo
        .update(999, UpdateReservationParams::default(), 100.0)
        .await;

    match result {
        Err(DbErr::RecordNotFound(_)) => {}
        other => panic!("Expected RecordNotFound, got: {:?}", other),
    }

    Ok(())
}
