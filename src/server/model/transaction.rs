use chrono::{DateTime, Utc};

use crate::model::transaction::TransactionDto;

/// Payment recorded against a reservation. Append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub reservation_id: i32,
    pub amount: f64,
    pub payment_method: String,
    /// Set by the server at recording time.
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Converts the transaction domain model to a DTO for API responses.
    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            reservation_id: self.reservation_id,
            amount: self.amount,
            payment_method: self.payment_method,
            date: self.date,
        }
    }

    /// Converts an entity model to a transaction domain model at the repository boundary.
    pub fn from_entity(entity: entity::transaction::Model) -> Self {
        Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            amount: entity.amount,
            payment_method: entity.payment_method,
            date: entity.date,
        }
    }
}

/// Parameters for recording a payment against a reservation.
#[derive(Debug, Clone)]
pub struct CreateTransactionParams {
    pub reservation_id: i32,
    pub amount: f64,
    pub payment_method: String,
}
