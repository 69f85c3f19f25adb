//! Transaction factory for creating test payment records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transactions with customizable fields.
///
/// Requires an existing reservation.
pub struct TransactionFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    amount: f64,
    payment_method: String,
    date: chrono::DateTime<Utc>,
}

impl<'a> TransactionFactory<'a> {
    /// Creates a new TransactionFactory with default values.
    ///
    /// Defaults:
    /// - amount: `100.0`
    /// - payment_method: `"Credit Card"`
    /// - date: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `reservation_id` - ID of the reservation being paid against
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        Self {
            db,
            reservation_id,
            amount: 100.0,
            payment_method: "Credit Card".to_string(),
            date: Utc::now(),
        }
    }

    /// Sets the payment amount.
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the payment method label.
    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = payment_method.into();
        self
    }

    /// Sets the payment timestamp.
    pub fn date(mut self, date: chrono::DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the transaction entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::transaction::Model)` - Created transaction entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::transaction::Model, DbErr> {
        entity::transaction::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation_id),
            amount: ActiveValue::Set(self.amount),
            payment_method: ActiveValue::Set(self.payment_method),
            date: ActiveValue::Set(self.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a transaction with default values against an existing reservation.
///
/// Shorthand for `TransactionFactory::new(db, reservation_id).build().await`.
pub async fn create_transaction(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::transaction::Model, DbErr> {
    TransactionFactory::new(db, reservation_id).build().await
}
