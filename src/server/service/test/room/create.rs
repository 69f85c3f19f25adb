use super::*;

/// Tests adding a room to the inventory.
///
/// Expected: Ok with an available room
#[tokio::test]
async fn creates_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoomService::new(db);
    let room = service
        .create(CreateRoomParams {
            room_number: 101,
            room_type: "Double".to_string(),
            price_per_night: 150.0,
        })
        .await?;

    assert_eq!(room.room_number, 101);
    assert!(room.is_available);

    Ok(())
}

/// Tests adding a room with a non-positive nightly rate.
///
/// Expected: Err(AppError::InvalidArgument)
#[tokio::test]
async fn rejects_non_positive_rate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoomService::new(db);
    let result = service
        .create(CreateRoomParams {
            room_number: 102,
            room_type: "Single".to_string(),
            price_per_night: 0.0,
        })
        .await;

    let error = result.unwrap_err();
    match error {
        AppError::InvalidArgument(message) => {
            assert_eq!(message, "Price per night must be positive")
        }
        _ => panic!("Expected InvalidArgument, got: {:?}", error),
    }

    Ok(())
}

/// Tests adding a room whose number is already taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_room_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .room_number(205)
        .build()
        .await?;

    let service = RoomService::new(db);
    let result = service
        .create(CreateRoomParams {
            room_number: 205,
            room_type: "Suite".to_string(),
            price_per_night: 300.0,
        })
        .await;

    let error = result.unwrap_err();
    match error {
        AppError::Conflict(message) => assert_eq!(message, "Room number already exists"),
        _ => panic!("Expected Conflict, got: {:?}", error),
    }

    Ok(())
}
