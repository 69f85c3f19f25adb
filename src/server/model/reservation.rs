//! Reservation domain models and parameters.
//!
//! A reservation links one customer to one room for a date range. Its total
//! cost is derived from the stay length and the room's nightly rate and is
//! never accepted from the client, neither on create nor on update.

use chrono::{DateTime, Utc};

use crate::model::reservation::ReservationDto;

/// Booking of a room by a customer for a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub customer_id: i32,
    pub room_id: i32,
    pub check_in_date: DateTime<Utc>,
    /// Strictly after `check_in_date`; the stay spans at least one night.
    pub check_out_date: DateTime<Utc>,
    /// Nights multiplied by the room's nightly rate at booking time.
    pub total_cost: f64,
}

impl Reservation {
    /// Converts the reservation domain model to a DTO for API responses.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            customer_id: self.customer_id,
            room_id: self.room_id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            total_cost: self.total_cost,
        }
    }

    /// Converts an entity model to a reservation domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            room_id: entity.room_id,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            total_cost: entity.total_cost,
        }
    }
}

/// Parameters for booking a room.
///
/// The total cost is not part of the parameters; the reservation service
/// derives it from the dates and the room rate.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub customer_id: i32,
    pub room_id: i32,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
}

/// Field mask for partial reservation updates.
///
/// `None` leaves the stored value untouched. Changing any of these fields
/// re-triggers date validation and cost recomputation in the service.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParams {
    pub customer_id: Option<i32>,
    pub room_id: Option<i32>,
    pub check_in_date: Option<DateTime<Utc>>,
    pub check_out_date: Option<DateTime<Utc>>,
}
