//! Reservation factory for creating test bookings.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Requires an existing customer and room; create those first (or use
/// `factory::helpers::create_reservation_with_dependencies`).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, customer.id, room.id)
///     .check_in_date(check_in)
///     .check_out_date(check_in + Duration::days(2))
///     .total_cost(200.0)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    room_id: i32,
    check_in_date: chrono::DateTime<Utc>,
    check_out_date: chrono::DateTime<Utc>,
    total_cost: f64,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - check_in_date: now
    /// - check_out_date: three days after check-in
    /// - total_cost: `300.0` (three nights at the default room rate)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `customer_id` - ID of the guest holding the booking
    /// - `room_id` - ID of the booked room
    pub fn new(db: &'a DatabaseConnection, customer_id: i32, room_id: i32) -> Self {
        let check_in_date = Utc::now();
        Self {
            db,
            customer_id,
            room_id,
            check_in_date,
            check_out_date: check_in_date + Duration::days(3),
            total_cost: 300.0,
        }
    }

    /// Sets the check-in date.
    pub fn check_in_date(mut self, check_in_date: chrono::DateTime<Utc>) -> Self {
        self.check_in_date = check_in_date;
        self
    }

    /// Sets the check-out date.
    pub fn check_out_date(mut self, check_out_date: chrono::DateTime<Utc>) -> Self {
        self.check_out_date = check_out_date;
        self
    }

    /// Sets the stored total cost.
    pub fn total_cost(mut self, total_cost: f64) -> Self {
        self.total_cost = total_cost;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            room_id: ActiveValue::Set(self.room_id),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            total_cost: ActiveValue::Set(self.total_cost),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for an existing customer and room.
///
/// Shorthand for `ReservationFactory::new(db, customer_id, room_id).build().await`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    customer_id: i32,
    room_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, customer_id, room_id).build().await
}
