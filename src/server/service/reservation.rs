use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        customer::CustomerRepository, reservation::ReservationRepository, room::RoomRepository,
    },
    error::AppError,
    model::reservation::{CreateReservationParams, Reservation, UpdateReservationParams},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a room for a customer
    ///
    /// Validates that the customer and room exist and that the room is
    /// available, derives the total cost from the length of stay, and marks
    /// the room occupied. Everything runs in one transaction; a failed
    /// validation persists nothing.
    ///
    /// # Arguments
    /// - `params`: Customer, room, and stay dates
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The created reservation with its derived cost
    /// - `Err(AppError::NotFound)`: Customer or room does not exist
    /// - `Err(AppError::Conflict)`: Room is not available
    /// - `Err(AppError::InvalidArgument)`: Check-out is not after check-in
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let customer_repo = CustomerRepository::new(&txn);
        let room_repo = RoomRepository::new(&txn);
        let reservation_repo = ReservationRepository::new(&txn);

        if customer_repo
            .find_by_id(params.customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        let Some(room) = room_repo.find_by_id(params.room_id).await? else {
            return Err(AppError::NotFound("Room not found".to_string()));
        };

        if !room.is_available {
            return Err(AppError::Conflict("Room is not available".to_string()));
        }

        let nights = (params.check_out_date - params.check_in_date).num_days();
        if nights <= 0 {
            return Err(AppError::InvalidArgument(
                "Check-out date must be after check-in date".to_string(),
            ));
        }

        let total_cost = nights as f64 * room.price_per_night;

        // Claiming the room re-checks the availability flag atomically, so of
        // two racing bookings exactly one wins.
        if !room_repo.try_occupy(params.room_id).await? {
            return Err(AppError::Conflict("Room is not available".to_string()));
        }

        let reservation = reservation_repo
            .create(
                params.customer_id,
                params.room_id,
                params.check_in_date,
                params.check_out_date,
                total_cost,
            )
            .await?;

        txn.commit().await?;

        Ok(reservation)
    }

    /// Updates a reservation with the fields present in the mask
    ///
    /// Re-validates the date order over the effective values and recomputes
    /// the total cost from the effective room's nightly rate, whether or not
    /// those fields changed. Availability flags stay as they are: moving a
    /// reservation to another room neither frees the old room nor claims the
    /// new one.
    ///
    /// # Arguments
    /// - `id`: Reservation ID
    /// - `params`: Field mask of values to change
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The updated reservation with recomputed cost
    /// - `Err(AppError::NotFound)`: Reservation, customer, or room does not exist
    /// - `Err(AppError::InvalidArgument)`: Effective check-out is not after check-in
    /// - `Err(AppError)`: Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReservationParams,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let customer_repo = CustomerRepository::new(&txn);
        let room_repo = RoomRepository::new(&txn);
        let reservation_repo = ReservationRepository::new(&txn);

        let Some(current) = reservation_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        };

        if let Some(customer_id) = params.customer_id {
            if customer_repo.find_by_id(customer_id).await?.is_none() {
                return Err(AppError::NotFound("Customer not found".to_string()));
            }
        }

        // The effective room is fetched even when unchanged; the cost is
        // recomputed from its nightly rate below.
        let room_id = params.room_id.unwrap_or(current.room_id);
        let Some(room) = room_repo.find_by_id(room_id).await? else {
            return Err(AppError::NotFound("Room not found".to_string()));
        };

        let check_in_date = params.check_in_date.unwrap_or(current.check_in_date);
        let check_out_date = params.check_out_date.unwrap_or(current.check_out_date);

        let nights = (check_out_date - check_in_date).num_days();
        if nights <= 0 {
            return Err(AppError::InvalidArgument(
                "Check-out date must be after check-in date".to_string(),
            ));
        }

        let total_cost = nights as f64 * room.price_per_night;

        let reservation = reservation_repo.update(id, params, total_cost).await?;

        txn.commit().await?;

        Ok(reservation)
    }

    /// Gets all reservations
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)`: All reservations (empty if none exist)
    /// - `Err(AppError)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
