use super::*;

/// Tests finding an existing room by its room number.
///
/// Expected: Ok(Some(Room))
#[tokio::test]
async fn finds_room_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::room::RoomFactory::new(db)
        .room_number(314)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let found = repo.find_by_room_number(314).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests looking up a room number that is not assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);
    let found = repo.find_by_room_number(9999).await?;

    assert!(found.is_none());

    Ok(())
}
