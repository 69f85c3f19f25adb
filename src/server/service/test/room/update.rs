use super::*;

/// Tests a partial room update.
///
/// Expected: Ok with only the masked fields changed
#[tokio::test]
async fn updates_fields_in_mask() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .room_type("Single")
        .price_per_night(100.0)
        .build()
        .await?;

    let service = RoomService::new(db);
    let updated = service
        .update(
            room.id,
            UpdateRoomParams {
                room_type: Some("Deluxe".to_string()),
                price_per_night: Some(240.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.room_type, "Deluxe");
    assert_eq!(updated.price_per_night, 240.0);
    assert_eq!(updated.room_number, room.room_number);

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoomService::new(db);
    let result = service
        .update(
            999,
            UpdateRoomParams {
                price_per_night: Some(240.0),
                ..Default::default()
            },
        )
        .await;

    let error = result.unwrap_err();
    match error {
        AppError::NotFound(message) => assert_eq!(message, "Room not found"),
        _ => panic!("Expected NotFound, got: {:?}", error),
    }

    Ok(())
}

/// Tests that a rate change does not touch existing bookings.
///
/// A reservation's cost is fixed when it is booked; repricing the room
/// afterwards must leave the stored total alone.
///
/// Expected: Ok with the reservation cost unchanged
#[tokio::test]
async fn rate_change_leaves_existing_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;
    assert_eq!(reservation.total_cost, 300.0);

    let service = RoomService::new(db);
    service
        .update(
            room.id,
            UpdateRoomParams {
                price_per_night: Some(500.0),
                ..Default::default()
            },
        )
        .await?;

    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.total_cost, 300.0);

    Ok(())
}
