use super::*;

/// Tests claiming an available room.
///
/// Verifies that the compare-and-set matches the row and flips the
/// availability flag.
///
/// Expected: Ok(true) with the room marked unavailable
#[tokio::test]
async fn claims_available_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);
    let claimed = repo.try_occupy(room.id).await?;

    assert!(claimed);

    let db_room = entity::prelude::Room::find_by_id(room.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!db_room.is_available);

    Ok(())
}

/// Tests claiming a room that is already occupied.
///
/// The compare-and-set matches no row, so a second claim on the same room
/// reports failure instead of silently succeeding.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_already_occupied() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .available(false)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let claimed = repo.try_occupy(room.id).await?;

    assert!(!claimed);

    Ok(())
}

/// Tests claiming a room ID that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let claimed = repo.try_occupy(999).await?;

    assert!(!claimed);

    Ok(())
}
