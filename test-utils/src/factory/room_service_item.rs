//! Room-service item factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test room-service catalog items.
pub struct RoomServiceItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    price: f64,
}

impl<'a> RoomServiceItemFactory<'a> {
    /// Creates a new RoomServiceItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - description: `None`
    /// - price: `20.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Item {}", next_id()),
            description: None,
            price: 20.0,
        }
    }

    /// Sets the catalog item name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the catalog item description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the unit price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the catalog item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room_service_item::Model)` - Created item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room_service_item::Model, DbErr> {
        entity::room_service_item::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catalog item with default values.
///
/// Shorthand for `RoomServiceItemFactory::new(db).build().await`.
pub async fn create_item(db: &DatabaseConnection) -> Result<entity::room_service_item::Model, DbErr> {
    RoomServiceItemFactory::new(db).build().await
}

/// Creates a catalog item with a specific unit price.
pub async fn create_item_with_price(
    db: &DatabaseConnection,
    price: f64,
) -> Result<entity::room_service_item::Model, DbErr> {
    RoomServiceItemFactory::new(db).price(price).build().await
}
