//! Room factory for creating test room records.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// Provides a builder pattern for creating room entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
///
/// let room = RoomFactory::new(&db)
///     .room_type("Suite")
///     .price_per_night(250.0)
///     .available(false)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: i32,
    room_type: String,
    price_per_night: f64,
    is_available: bool,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: auto-incremented unique number
    /// - room_type: `"Single"`
    /// - price_per_night: `100.0`
    /// - is_available: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            room_number: next_id() as i32,
            room_type: "Single".to_string(),
            price_per_night: 100.0,
            is_available: true,
        }
    }

    /// Sets the unique room number.
    pub fn room_number(mut self, room_number: i32) -> Self {
        self.room_number = room_number;
        self
    }

    /// Sets the room type (for example "Single", "Double", "Suite").
    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    /// Sets the nightly price.
    pub fn price_per_night(mut self, price_per_night: f64) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    /// Sets whether the room can currently be booked.
    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            room_type: ActiveValue::Set(self.room_type),
            price_per_night: ActiveValue::Set(self.price_per_night),
            is_available: ActiveValue::Set(self.is_available),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available room with default values.
///
/// Shorthand for `RoomFactory::new(db).build().await`.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}

/// Creates an available room with a specific nightly price.
///
/// # Example
///
/// ```rust,ignore
/// let room = create_room_with_price(&db, 100.0).await?;
/// ```
pub async fn create_room_with_price(
    db: &DatabaseConnection,
    price_per_night: f64,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db)
        .price_per_night(price_per_night)
        .build()
        .await
}
