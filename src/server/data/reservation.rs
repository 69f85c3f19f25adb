use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::reservation::{Reservation, UpdateReservationParams};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new reservation with a precomputed total cost
    ///
    /// The caller is responsible for validating the dates and deriving the
    /// cost; this method only persists the row.
    ///
    /// # Arguments
    /// - `customer_id`: ID of the booking customer
    /// - `room_id`: ID of the booked room
    /// - `check_in_date`: Start of the stay
    /// - `check_out_date`: End of the stay
    /// - `total_cost`: Nights multiplied by the room's nightly rate
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The created reservation
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        customer_id: i32,
        room_id: i32,
        check_in_date: DateTime<Utc>,
        check_out_date: DateTime<Utc>,
        total_cost: f64,
    ) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            room_id: ActiveValue::Set(room_id),
            check_in_date: ActiveValue::Set(check_in_date),
            check_out_date: ActiveValue::Set(check_out_date),
            total_cost: ActiveValue::Set(total_cost),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Finds a reservation by ID
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))`: Reservation found
    /// - `Ok(None)`: No reservation with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(reservation.map(Reservation::from_entity))
    }

    /// Gets all reservations, unordered
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)`: All reservations (empty if none exist)
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find().all(self.db).await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Updates a reservation with the fields present in the mask
    ///
    /// The total cost is always rewritten; the reservation service recomputes
    /// it from the effective dates and room on every update.
    ///
    /// # Arguments
    /// - `id`: Reservation ID
    /// - `params`: Field mask of values to change
    /// - `total_cost`: Recomputed cost for the effective dates and room
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The updated reservation
    /// - `Err(DbErr)`: Database error, `RecordNotFound` if the ID does not resolve
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReservationParams,
        total_cost: f64,
    ) -> Result<Reservation, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();

        if let Some(customer_id) = params.customer_id {
            active_model.customer_id = ActiveValue::Set(customer_id);
        }
        if let Some(room_id) = params.room_id {
            active_model.room_id = ActiveValue::Set(room_id);
        }
        if let Some(check_in_date) = params.check_in_date {
            active_model.check_in_date = ActiveValue::Set(check_in_date);
        }
        if let Some(check_out_date) = params.check_out_date {
            active_model.check_out_date = ActiveValue::Set(check_out_date);
        }
        active_model.total_cost = ActiveValue::Set(total_cost);

        let updated_reservation = active_model.update(self.db).await?;

        Ok(Reservation::from_entity(updated_reservation))
    }
}
