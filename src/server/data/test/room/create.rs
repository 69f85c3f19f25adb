use super::*;

/// Tests creating a new room.
///
/// Verifies that the repository inserts the room with the given number, type,
/// and nightly rate, and that new rooms start out available.
///
/// Expected: Ok with an available room
#[tokio::test]
async fn creates_available_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo
        .create(CreateRoomParams {
            room_number: 101,
            room_type: "Double".to_string(),
            price_per_night: 150.0,
        })
        .await?;

    assert!(room.id > 0);
    assert_eq!(room.room_number, 101);
    assert_eq!(room.room_type, "Double");
    assert_eq!(room.price_per_night, 150.0);
    assert!(room.is_available);

    // Verify room exists in database
    let db_room = entity::prelude::Room::find_by_id(room.id).one(db).await?;
    assert!(db_room.is_some());
    assert!(db_room.unwrap().is_available);

    Ok(())
}

/// Tests the unique constraint on the room number column.
///
/// Verifies that inserting a second room with a number that is already taken
/// fails at the database level.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_room_number() -> Result<(), DbErr> {
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

    let repo = RoomRepository::new(db);
    let result = repo
        .create(CreateRoomParams {
            room_number: 205,
            room_type: "Suite".to_string(),
            price_per_night: 300.0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
