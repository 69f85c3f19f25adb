use super::*;

/// Tests adding a catalog item with a description.
///
/// Expected: Ok with item created
#[tokio::test]
async fn creates_item_with_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoomServiceItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomServiceItemRepository::new(db);
    let item = repo
        .create(CreateRoomServiceItemParams {
            name: "Breakfast".to_string(),
            description: Some("Continental breakfast tray".to_string()),
            price: 18.5,
        })
        .await?;

    assert!(item.id > 0);
    assert_eq!(item.name, "Breakfast");
    assert_eq!(
        item.description.as_deref(),
        Some("Continental breakfast tray")
    );
    assert_eq!(item.price, 18.5);

    Ok(())
}

/// Tests adding a catalog item without a description.
///
/// Expected: Ok with item created and no description stored
#[tokio::test]
async fn creates_item_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoomServiceItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomServiceItemRepository::new(db);
    let item = repo
        .create(CreateRoomServiceItemParams {
            name: "Water".to_string(),
            description: None,
            price: 3.0,
        })
        .await?;

    assert!(item.description.is_none());

    let found = repo.find_by_id(item.id).await?;
    assert!(found.is_some());
    assert!(found.unwrap().description.is_none());

    Ok(())
}
