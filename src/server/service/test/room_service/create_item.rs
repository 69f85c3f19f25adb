use super::*;

/// Tests adding an item to the catalog.
///
/// Expected: Ok with the item created
#[tokio::test]
async fn creates_catalog_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoomServiceItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoomServiceItemService::new(db);
    let item = service
        .create(CreateRoomServiceItemParams {
            name: "Breakfast".to_string(),
            description: Some("Continental breakfast tray".to_string()),
            price: 18.5,
        })
        .await?;

    assert!(item.id > 0);
    assert_eq!(item.name, "Breakfast");

    Ok(())
}

/// Tests adding a catalog item with a non-positive price.
///
/// Expected: Err(AppError::InvalidArgument)
#[tokio::test]
async fn rejects_non_positive_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoomServiceItem)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoomServiceItemService::new(db);
    let result = service
        .create(CreateRoomServiceItemParams {
            name: "Tea".to_string(),
            description: None,
            price: -1.0,
        })
        .await;

    let error = result.unwrap_err();
    match error {
        AppError::InvalidArgument(message) => assert_eq!(message, "Price must be positive"),
        _ => panic!("Expected InvalidArgument, got: {:?}", error),
    }

    Ok(())
}
