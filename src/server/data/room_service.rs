//! Repositories for the room service catalog and orders.
//!
//! Orders span two tables: the order row and one line row per item. The order
//! repository always loads and persists the two together so callers never see
//! an order without its lines.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::model::room_service::{
    CreateRoomServiceItemParams, OrderLine, RoomServiceItem, RoomServiceOrder,
};

pub struct RoomServiceItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomServiceItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new catalog item
    ///
    /// # Returns
    /// - `Ok(RoomServiceItem)`: The created item
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateRoomServiceItemParams,
    ) -> Result<RoomServiceItem, DbErr> {
        let item = entity::room_service_item::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoomServiceItem::from_entity(item))
    }

    /// Finds a catalog item by ID
    ///
    /// # Returns
    /// - `Ok(Some(RoomServiceItem))`: Item found
    /// - `Ok(None)`: No item with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoomServiceItem>, DbErr> {
        let item = entity::prelude::RoomServiceItem::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(item.map(RoomServiceItem::from_entity))
    }

    /// Gets the whole catalog, unordered
    ///
    /// # Returns
    /// - `Ok(Vec<RoomServiceItem>)`: All items (empty if none exist)
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<RoomServiceItem>, DbErr> {
        let items = entity::prelude::RoomServiceItem::find().all(self.db).await?;

        Ok(items
            .into_iter()
            .map(RoomServiceItem::from_entity)
            .collect())
    }
}

pub struct RoomServiceOrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomServiceOrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an order together with all of its lines
    ///
    /// The caller derives the total from the catalog; this method only
    /// persists the rows. Run inside a transaction so the order and its lines
    /// land together.
    ///
    /// # Arguments
    /// - `reservation_id`: Reservation the order belongs to
    /// - `total_cost`: Sum of price times quantity over all lines
    /// - `lines`: Item and quantity pairs
    ///
    /// # Returns
    /// - `Ok(RoomServiceOrder)`: The created order with its lines
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        reservation_id: i32,
        total_cost: f64,
        lines: Vec<OrderLine>,
    ) -> Result<RoomServiceOrder, DbErr> {
        let order = entity::room_service_order::ActiveModel {
            reservation_id: ActiveValue::Set(reservation_id),
            total_cost: ActiveValue::Set(total_cost),
            status: ActiveValue::Set("Pending".to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut line_entities = Vec::with_capacity(lines.len());
        for line in lines {
            let line_entity = entity::room_service_order_item::ActiveModel {
                room_service_order_id: ActiveValue::Set(order.id),
                room_service_item_id: ActiveValue::Set(line.item_id),
                quantity: ActiveValue::Set(line.quantity),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            line_entities.push(line_entity);
        }

        Ok(RoomServiceOrder::from_entity(order, line_entities))
    }

    /// Gets all orders with their lines, unordered
    ///
    /// # Returns
    /// - `Ok(Vec<RoomServiceOrder>)`: All orders (empty if none exist)
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<RoomServiceOrder>, DbErr> {
        let orders = entity::prelude::RoomServiceOrder::find()
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let lines = self.get_lines(order.id).await?;
            result.push(RoomServiceOrder::from_entity(order, lines));
        }

        Ok(result)
    }

    /// Sums the order totals linked to a reservation
    ///
    /// # Returns
    /// - `Ok(f64)`: Sum of order totals, 0 when the reservation has no orders
    /// - `Err(DbErr)`: Database error
    pub async fn sum_costs_by_reservation(&self, reservation_id: i32) -> Result<f64, DbErr> {
        let total: Option<Option<f64>> = entity::prelude::RoomServiceOrder::find()
            .filter(entity::room_service_order::Column::ReservationId.eq(reservation_id))
            .select_only()
            .column_as(entity::room_service_order::Column::TotalCost.sum(), "total")
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    async fn get_lines(
        &self,
        order_id: i32,
    ) -> Result<Vec<entity::room_service_order_item::Model>, DbErr> {
        entity::prelude::RoomServiceOrderItem::find()
            .filter(entity::room_service_order_item::Column::RoomServiceOrderId.eq(order_id))
            .all(self.db)
            .await
    }
}
