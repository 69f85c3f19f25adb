use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reservation::ReservationRepository, transaction::TransactionRepository},
    error::AppError,
    model::transaction::{CreateTransactionParams, Transaction},
};

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment against a reservation
    ///
    /// The transaction timestamp is set server side at insert time. The
    /// ledger is append-only; there is no update or delete.
    ///
    /// # Arguments
    /// - `params`: Reservation, amount, and payment method
    ///
    /// # Returns
    /// - `Ok(Transaction)`: The recorded transaction
    /// - `Err(AppError::NotFound)`: Reservation does not exist
    /// - `Err(AppError::InvalidArgument)`: Amount is not positive
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateTransactionParams) -> Result<Transaction, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);
        let transaction_repo = TransactionRepository::new(self.db);

        if params.amount <= 0.0 {
            return Err(AppError::InvalidArgument(
                "Amount must be positive".to_string(),
            ));
        }

        if reservation_repo
            .find_by_id(params.reservation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        }

        Ok(transaction_repo.create(params).await?)
    }

    /// Gets all transactions
    ///
    /// # Returns
    /// - `Ok(Vec<Transaction>)`: All transactions (empty if none exist)
    /// - `Err(AppError)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Transaction>, AppError> {
        let repo = TransactionRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
