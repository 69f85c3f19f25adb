//! Room-service order factory for creating test orders with their lines.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test room-service orders.
///
/// Requires an existing reservation. Lines reference existing catalog items
/// and are inserted together with the order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room_service_order::RoomServiceOrderFactory;
///
/// let order = RoomServiceOrderFactory::new(&db, reservation.id)
///     .total_cost(60.0)
///     .with_line(item.id, 3)
///     .build()
///     .await?;
/// ```
pub struct RoomServiceOrderFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    total_cost: f64,
    status: String,
    lines: Vec<(i32, i32)>,
}

impl<'a> RoomServiceOrderFactory<'a> {
    /// Creates a new RoomServiceOrderFactory with default values.
    ///
    /// Defaults:
    /// - total_cost: `60.0`
    /// - status: `"Pending"`
    /// - no lines
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    /// - `reservation_id` - ID of the reservation the order belongs to
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        Self {
            db,
            reservation_id,
            total_cost: 60.0,
            status: "Pending".to_string(),
            lines: Vec::new(),
        }
    }

    /// Sets the stored order total.
    pub fn total_cost(mut self, total_cost: f64) -> Self {
        self.total_cost = total_cost;
        self
    }

    /// Sets the order status label.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Appends a line for `quantity` units of an existing catalog item.
    pub fn with_line(mut self, item_id: i32, quantity: i32) -> Self {
        self.lines.push((item_id, quantity));
        self
    }

    /// Builds and inserts the order and its lines into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room_service_order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room_service_order::Model, DbErr> {
        let order = entity::room_service_order::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation_id),
            total_cost: ActiveValue::Set(self.total_cost),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (item_id, quantity) in self.lines {
            entity::room_service_order_item::ActiveModel {
                room_service_order_id: ActiveValue::Set(order.id),
                room_service_item_id: ActiveValue::Set(item_id),
                quantity: ActiveValue::Set(quantity),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates an order with default values (and no lines) against a reservation.
///
/// Shorthand for `RoomServiceOrderFactory::new(db, reservation_id).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::room_service_order::Model, DbErr> {
    RoomServiceOrderFactory::new(db, reservation_id).build().await
}
