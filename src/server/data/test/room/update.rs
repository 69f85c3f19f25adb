use super::*;

/// Tests a partial update through the field mask.
///
/// Verifies that only the fields present in the mask change, while absent
/// fields keep their stored values.
///
/// Expected: Ok with the nightly rate changed and everything else untouched
#[tokio::test]
async fn updates_fields_in_mask() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::room::RoomFactory::new(db)
        .room_number(401)
        .room_type("Single")
        .price_per_night(100.0)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateRoomParams {
                price_per_night: Some(175.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.price_per_night, 175.0);
    assert_eq!(updated.room_number, 401);
    assert_eq!(updated.room_type, "Single");
    assert!(updated.is_available);

    Ok(())
}

/// Tests flipping the availability flag through the mask.
///
/// Expected: Ok with the room marked unavailable
#[tokio::test]
async fn updates_availability_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateRoomParams {
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated.is_available);

    // Verify flag persisted in database
    let db_room = entity::prelude::Room::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!db_room.is_available);

    Ok(())
}

/// Tests updating a room ID that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn returns_record_not_found_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateRoomParams {
                price_per_night: Some(200.0),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(DbErr::RecordNotFound(_)) => {}
        other => panic!("Expected RecordNotFound, got: {:?}", other),
    }

    Ok(())
}
