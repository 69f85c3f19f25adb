use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reservation::ReservationRepository, room_service::RoomServiceOrderRepository},
    error::AppError,
};

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the running bill for a reservation
    ///
    /// The bill is the room cost plus the total of every room service order
    /// placed against the reservation. Nothing is persisted; each call reads
    /// the current state.
    ///
    /// # Arguments
    /// - `reservation_id`: Reservation to bill
    ///
    /// # Returns
    /// - `Ok(f64)`: Amount owed for the stay so far
    /// - `Err(AppError::NotFound)`: Reservation does not exist
    /// - `Err(AppError)`: Database error
    pub async fn compute_bill(&self, reservation_id: i32) -> Result<f64, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);
        let order_repo = RoomServiceOrderRepository::new(self.db);

        let Some(reservation) = reservation_repo.find_by_id(reservation_id).await? else {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        };

        let service_total = order_repo.sum_costs_by_reservation(reservation_id).await?;

        Ok(reservation.total_cost + service_total)
    }
}
