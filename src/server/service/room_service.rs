//! Room service catalog and order management.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        reservation::ReservationRepository,
        room_service::{RoomServiceItemRepository, RoomServiceOrderRepository},
    },
    error::AppError,
    model::room_service::{
        CreateRoomServiceItemParams, CreateRoomServiceOrderParams, RoomServiceItem,
        RoomServiceOrder,
    },
};

pub struct RoomServiceItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomServiceItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an item to the room service catalog
    ///
    /// # Arguments
    /// - `params`: Item name, optional description, and price
    ///
    /// # Returns
    /// - `Ok(RoomServiceItem)`: The created catalog item
    /// - `Err(AppError::InvalidArgument)`: Price is not positive
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        params: CreateRoomServiceItemParams,
    ) -> Result<RoomServiceItem, AppError> {
        let repo = RoomServiceItemRepository::new(self.db);

        if params.price <= 0.0 {
            return Err(AppError::InvalidArgument(
                "Price must be positive".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    /// Gets the full catalog
    ///
    /// # Returns
    /// - `Ok(Vec<RoomServiceItem>)`: All catalog items (empty if none exist)
    /// - `Err(AppError)`: Database error
    pub async fn get_all(&self) -> Result<Vec<RoomServiceItem>, AppError> {
        let repo = RoomServiceItemRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}

pub struct RoomServiceOrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomServiceOrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places a room service order against a reservation
    ///
    /// Validates the reservation and every ordered item, then derives the
    /// order total from the catalog prices. The order and its lines are
    /// written in one transaction; an unknown item in any line leaves no rows
    /// behind. An empty line list produces a zero-cost order.
    ///
    /// # Arguments
    /// - `params`: Reservation and ordered lines
    ///
    /// # Returns
    /// - `Ok(RoomServiceOrder)`: The created order with its derived total
    /// - `Err(AppError::NotFound)`: Reservation or an ordered item does not exist
    /// - `Err(AppError::InvalidArgument)`: A line has a non-positive quantity
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        params: CreateRoomServiceOrderParams,
    ) -> Result<RoomServiceOrder, AppError> {
        let txn = self.db.begin().await?;

        let reservation_repo = ReservationRepository::new(&txn);
        let item_repo = RoomServiceItemRepository::new(&txn);
        let order_repo = RoomServiceOrderRepository::new(&txn);

        if reservation_repo
            .find_by_id(params.reservation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        }

        let mut total_cost = 0.0;
        for line in &params.lines {
            if line.quantity < 1 {
                return Err(AppError::InvalidArgument(
                    "Quantity must be at least 1".to_string(),
                ));
            }

            let Some(item) = item_repo.find_by_id(line.item_id).await? else {
                return Err(AppError::NotFound(
                    "Room service item not found".to_string(),
                ));
            };

            total_cost += item.price * line.quantity as f64;
        }

        let order = order_repo
            .create(params.reservation_id, total_cost, params.lines)
            .await?;

        txn.commit().await?;

        Ok(order)
    }

    /// Gets all orders with their lines
    ///
    /// # Returns
    /// - `Ok(Vec<RoomServiceOrder>)`: All orders (empty if none exist)
    /// - `Err(AppError)`: Database error
    pub async fn get_all(&self) -> Result<Vec<RoomServiceOrder>, AppError> {
        let repo = RoomServiceOrderRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
