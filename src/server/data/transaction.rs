use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::transaction::{CreateTransactionParams, Transaction};

pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a payment against a reservation
    ///
    /// The timestamp is set to the current time at insertion.
    ///
    /// # Arguments
    /// - `params`: Payment data including reservation, amount, and method
    ///
    /// # Returns
    /// - `Ok(Transaction)`: The recorded transaction
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateTransactionParams) -> Result<Transaction, DbErr> {
        let transaction = entity::transaction::ActiveModel {
            reservation_id: ActiveValue::Set(params.reservation_id),
            amount: ActiveValue::Set(params.amount),
            payment_method: ActiveValue::Set(params.payment_method),
            date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Transaction::from_entity(transaction))
    }

    /// Gets all transactions, unordered
    ///
    /// # Returns
    /// - `Ok(Vec<Transaction>)`: All transactions (empty if none exist)
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Transaction>, DbErr> {
        let transactions = entity::prelude::Transaction::find().all(self.db).await?;

        Ok(transactions
            .into_iter()
            .map(Transaction::from_entity)
            .collect())
    }
}
